use thiserror::Error;

/// Errors raised by the store and the browser glue
#[derive(Debug, Error)]
pub enum TodoError {
    /// Stored value is not a valid item list
    #[error("malformed item list in storage: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize item list: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Backend refused a read or write (LocalStorage unavailable, quota exceeded)
    #[error("storage error: {0}")]
    Storage(String),

    /// DOM call failed while building rows or wiring events
    #[error("dom error: {0}")]
    Dom(String),

    #[error("page element #{0} not found")]
    MissingElement(&'static str),
}

pub type Result<T> = std::result::Result<T, TodoError>;
