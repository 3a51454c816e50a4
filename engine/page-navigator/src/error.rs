//! Error types for page navigation and DOM queries

use thiserror::Error;

/// Result type alias for navigation operations
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Errors that can occur while loading a page
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Page load exceeded the navigator's timeout budget
    #[error("Navigation timed out: {url}")]
    Timeout { url: String },

    /// The rendering service answered with a non-success status
    #[error("Rendering service error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors that can occur while querying a rendered page
#[derive(Error, Debug)]
pub enum QueryError {
    /// The selector failed to parse as CSS
    #[error("Invalid selector: {selector}")]
    InvalidSelector { selector: String },

    /// A single-element query matched nothing
    #[error("No element matched selector: {selector}")]
    NoMatch { selector: String },
}
