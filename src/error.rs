use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by graph construction, input parsing, and the
/// shortest-path engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A node identifier falls outside the arena's fixed range `[0, capacity)`.
    #[error("node {node} out of range for capacity {capacity}")]
    NodeOutOfRange { node: usize, capacity: usize },

    /// Malformed input that cannot be turned into an edge stream.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
