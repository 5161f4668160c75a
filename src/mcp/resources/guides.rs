//! Guide resources: `guide://{section}`.
//!
//! Every guide section is listed as a concrete resource, and the URI
//! template lets clients address sections directly. Reading an unknown
//! section is not an error: the reply is a plain-text message listing the
//! valid sections.

use rmcp::model::AnnotateAble;
use rmcp::model::*;

use crate::registry::{guide_resource, Catalog, GuideSection, MIME_MARKDOWN};

/// URI scheme prefix shared by all guide resources.
pub const GUIDE_URI_PREFIX: &str = "guide://";
/// URI template for guide resources.
pub const URI_TEMPLATE_GUIDE: &str = "guide://{section}";

/// URI of one guide section.
pub fn guide_uri(section: GuideSection) -> String {
    format!("{}{}", GUIDE_URI_PREFIX, section.key())
}

fn guide_title(section: GuideSection) -> &'static str {
    match section {
        GuideSection::Setup => "Setting Up Memory Bank",
        GuideSection::Usage => "Using Memory Bank",
        GuideSection::Benefits => "Benefits of Memory Bank",
        GuideSection::Structure => "Memory Bank Structure",
    }
}

/// Returns one resource per guide section for `resources/list`.
pub fn list_guide_resources() -> Vec<Resource> {
    GuideSection::ALL
        .iter()
        .map(|&section| {
            RawResource {
                uri: guide_uri(section),
                name: section.key().into(),
                title: Some(guide_title(section).into()),
                description: Some(format!("Memory Bank guide: {}", section.key())),
                mime_type: Some(MIME_MARKDOWN.into()),
                size: None,
                icons: None,
                meta: None,
            }
            .no_annotation()
        })
        .collect()
}

/// Returns the guide URI template for `resources/templates/list`.
pub fn list_resource_templates() -> Vec<ResourceTemplate> {
    vec![RawResourceTemplate {
        uri_template: URI_TEMPLATE_GUIDE.into(),
        name: "guide".into(),
        title: Some("Memory Bank Guide".into()),
        description: Some(format!(
            "Guidance on Memory Bank setup and usage. Available sections: {}.",
            GuideSection::available()
        )),
        mime_type: Some(MIME_MARKDOWN.into()),
        icons: None,
    }
    .no_annotation()]
}

/// Reads a guide resource by URI.
///
/// Returns `None` if the URI is not a `guide://` URI.
pub fn read_guide_resource(uri: &str) -> Option<ReadResourceResult> {
    let section = uri.strip_prefix(GUIDE_URI_PREFIX)?;
    let guide = guide_resource(section);

    Some(ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.into(),
            mime_type: Some(guide.mime_type.into()),
            text: guide.content,
            meta: None,
        }],
    })
}
