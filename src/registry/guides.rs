//! Memory Bank guide text.
//!
//! Guides are short help topics served as `guide://{section}` resources.
//! A found guide is wrapped in a `# Guide: {section}` heading and served as
//! Markdown; an unknown section gets a plain-text message listing the valid
//! ones.

use std::fmt;

use super::traits::Catalog;

const SETUP: &str = include_str!("../../docs/guides/setup.md");
const USAGE: &str = include_str!("../../docs/guides/usage.md");
const BENEFITS: &str = include_str!("../../docs/guides/benefits.md");
const STRUCTURE: &str = include_str!("../../docs/guides/structure.md");

/// Media type of a found guide.
pub const MIME_MARKDOWN: &str = "text/markdown";
/// Media type of a "not found" reply.
pub const MIME_PLAIN: &str = "text/plain";

/// A guide topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuideSection {
    /// Creating the memory-bank directory and core files
    Setup,
    /// When and how to update the Memory Bank
    Usage,
    /// Why keep a Memory Bank at all
    Benefits,
    /// The core files and what each one holds
    Structure,
}

impl Catalog for GuideSection {
    const ALL: &'static [Self] = &[Self::Setup, Self::Usage, Self::Benefits, Self::Structure];

    fn key(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Usage => "usage",
            Self::Benefits => "benefits",
            Self::Structure => "structure",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Self::Setup => SETUP,
            Self::Usage => USAGE,
            Self::Benefits => BENEFITS,
            Self::Structure => STRUCTURE,
        }
    }
}

impl fmt::Display for GuideSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A resolved guide resource: text plus its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideResource {
    pub content: String,
    pub mime_type: &'static str,
}

impl GuideResource {
    /// True when the section was found (the content is Markdown).
    pub fn is_found(&self) -> bool {
        self.mime_type == MIME_MARKDOWN
    }
}

/// Guide section keys, in listing order.
pub fn guide_names() -> Vec<&'static str> {
    GuideSection::keys()
}

/// The Memory Bank structure guide.
pub fn structure_guide() -> &'static str {
    GuideSection::Structure.body()
}

/// Resolves a guide section.
pub fn guide_resource(section: &str) -> GuideResource {
    match GuideSection::from_key(section) {
        Some(guide) => GuideResource {
            content: format!("# Guide: {}\n\n{}", section, guide.body()),
            mime_type: MIME_MARKDOWN,
        },
        None => GuideResource {
            content: format!(
                "Guide for {} not found. Available guides: {}",
                section,
                GuideSection::available()
            ),
            mime_type: MIME_PLAIN,
        },
    }
}
