//! MCP resource handlers for memory-bank.
//!
//! Exposes the guide sections via the MCP resources/list,
//! resources/templates/list and resources/read protocol.

mod guides;

pub use guides::{
    guide_uri, list_guide_resources, list_resource_templates, read_guide_resource,
    GUIDE_URI_PREFIX, URI_TEMPLATE_GUIDE,
};
