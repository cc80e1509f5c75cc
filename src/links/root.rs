use super::Link;
use crate::document::Info;
use serde::{Deserialize, Serialize};

/// Response body for a navigable endpoint: document metadata plus links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
    pub links: Vec<Link>,
}

impl RootMetadata {
    /// Combine document metadata with a computed link list.
    #[must_use]
    pub fn assemble(info: &Info, links: Vec<Link>) -> Self {
        Self {
            title: info.title.clone(),
            description: info.description.clone(),
            version: info.version.clone(),
            links,
        }
    }
}
