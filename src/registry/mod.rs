//! The Memory Bank template and guide registry.
//!
//! This module provides:
//! - `MemoryBankFile`: the file templates (`projectbrief.md`, `progress.md`, ...)
//! - `GuideSection`: the help topics (`setup`, `usage`, `benefits`, `structure`)
//! - `Catalog`: the shared key lookup over both
//! - The query operations: [`structure_guide`], [`generate_template`],
//!   [`guide_resource`] and [`analyze_summary`]
//!
//! All content is compiled in and never changes at runtime. Unknown keys are
//! not errors: they produce a message listing the valid keys.

mod analyze;
mod guides;
mod templates;
mod traits;

pub use analyze::{analyze_summary, potential_project_name};
pub use guides::{
    guide_names, guide_resource, structure_guide, GuideResource, GuideSection, MIME_MARKDOWN,
    MIME_PLAIN,
};
pub use templates::{generate_template, template_names, MemoryBankFile};
pub use traits::Catalog;
