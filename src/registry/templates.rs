//! Memory Bank file templates.
//!
//! Each template is a Markdown skeleton for one file of a project's Memory
//! Bank, with `[Placeholder]` markers for the user to fill in.

use std::borrow::Cow;
use std::fmt;

use super::traits::Catalog;

const PROJECT_BRIEF: &str = include_str!("../../docs/templates/projectbrief.md");
const PRODUCT_CONTEXT: &str = include_str!("../../docs/templates/productContext.md");
const ACTIVE_CONTEXT: &str = include_str!("../../docs/templates/activeContext.md");
const SYSTEM_PATTERNS: &str = include_str!("../../docs/templates/systemPatterns.md");
const TECH_CONTEXT: &str = include_str!("../../docs/templates/techContext.md");
const PROGRESS: &str = include_str!("../../docs/templates/progress.md");
const ROADMAP: &str = include_str!("../../docs/templates/roadmap.md");

/// A file in the Memory Bank that has a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryBankFile {
    /// Foundation document that shapes all other files
    ProjectBrief,
    /// Why the project exists, problems being solved
    ProductContext,
    /// Current work focus, recent changes, next steps
    ActiveContext,
    /// Architecture, technical decisions, design patterns
    SystemPatterns,
    /// Technologies, development setup, constraints
    TechContext,
    /// What works, what's left to build
    Progress,
    /// Vision, priorities and milestones
    Roadmap,
}

impl Catalog for MemoryBankFile {
    const ALL: &'static [Self] = &[
        Self::ProjectBrief,
        Self::ProductContext,
        Self::ActiveContext,
        Self::SystemPatterns,
        Self::TechContext,
        Self::Progress,
        Self::Roadmap,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::ProjectBrief => "projectbrief.md",
            Self::ProductContext => "productContext.md",
            Self::ActiveContext => "activeContext.md",
            Self::SystemPatterns => "systemPatterns.md",
            Self::TechContext => "techContext.md",
            Self::Progress => "progress.md",
            Self::Roadmap => "roadmap.md",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Self::ProjectBrief => PROJECT_BRIEF,
            Self::ProductContext => PRODUCT_CONTEXT,
            Self::ActiveContext => ACTIVE_CONTEXT,
            Self::SystemPatterns => SYSTEM_PATTERNS,
            Self::TechContext => TECH_CONTEXT,
            Self::Progress => PROGRESS,
            Self::Roadmap => ROADMAP,
        }
    }
}

impl fmt::Display for MemoryBankFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Template file names, in listing order.
pub fn template_names() -> Vec<&'static str> {
    MemoryBankFile::keys()
}

/// Returns the template for `file_name`, or a message listing the available
/// templates when there is none.
///
/// Matching is exact and case-sensitive.
pub fn generate_template(file_name: &str) -> Cow<'static, str> {
    match MemoryBankFile::from_key(file_name) {
        Some(file) => Cow::Borrowed(file.body()),
        None => Cow::Owned(format!(
            "Template for {} not found. Available templates: {}",
            file_name,
            MemoryBankFile::available()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_returned_verbatim() {
        for file in MemoryBankFile::ALL {
            assert_eq!(generate_template(file.key()), file.body());
        }
    }

    #[test]
    fn test_found_template_is_borrowed() {
        assert!(matches!(generate_template("progress.md"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_template_names_order() {
        assert_eq!(
            template_names(),
            vec![
                "projectbrief.md",
                "productContext.md",
                "activeContext.md",
                "systemPatterns.md",
                "techContext.md",
                "progress.md",
                "roadmap.md",
            ]
        );
    }

    #[test]
    fn test_unknown_template_lists_all_names() {
        let msg = generate_template("readme.md");
        assert!(msg.contains("not found"));
        assert!(msg.starts_with("Template for readme.md not found."));
        for name in template_names() {
            assert!(msg.contains(name), "missing {} in: {}", name, msg);
        }
    }

    #[test]
    fn test_unknown_template_exact_message() {
        assert_eq!(
            generate_template(""),
            "Template for  not found. Available templates: projectbrief.md, productContext.md, \
             activeContext.md, systemPatterns.md, techContext.md, progress.md, roadmap.md"
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(MemoryBankFile::from_key("ProjectBrief.md").is_none());
        assert!(MemoryBankFile::from_key("projectbrief").is_none());
        assert!(generate_template("PROGRESS.MD").contains("not found"));
    }

    #[test]
    fn test_templates_have_title_placeholder() {
        for file in MemoryBankFile::ALL {
            let body = file.body();
            assert!(body.starts_with("# "), "{} should start with a heading", file);
            assert!(body.contains("[Project Name]"), "{} should name the project", file);
        }
    }

    #[test]
    fn test_display_is_key() {
        assert_eq!(MemoryBankFile::SystemPatterns.to_string(), "systemPatterns.md");
    }

    #[test]
    fn test_roadmap_ends_with_newline() {
        let body = MemoryBankFile::Roadmap.body();
        assert!(body.ends_with("- [Quality gate 3]\n"));
    }
}
