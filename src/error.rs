use thiserror::Error;

/// Failures reaching the browser environment.
///
/// None of these are fatal: callers log them and keep rendering with their
/// default state, which is the compact, uncollapsed layout at offset 0.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("no window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no root element")]
    NoDocumentElement,
    #[error("failed to {action} `{event}` listener: {message}")]
    Listener {
        action: &'static str,
        event: &'static str,
        message: String,
    },
    #[error("failed to read {what}: {message}")]
    Read { what: &'static str, message: String },
}
