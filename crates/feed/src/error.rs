// ABOUTME: Error types for rendering podcast documents.
// ABOUTME: Mapping is total; only the XML writing step can fail.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while rendering a feed to XML.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The XML writer rejected an event.
    #[error("failed to write xml: {0}")]
    Xml(String),
}

impl FeedError {
    /// Creates an Xml error from an underlying quick-xml or I/O error.
    pub fn xml(err: impl fmt::Display) -> Self {
        FeedError::Xml(err.to_string())
    }
}
