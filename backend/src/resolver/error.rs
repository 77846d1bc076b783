//! Error types for name resolution.

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, ResolverError>;

/// Ways a name lookup can fail.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// Sesame answered but no usable `%J` line was found
    #[error("Could not resolve \"{0}\"")]
    NotFound(String),

    /// Sesame answered with a non-success HTTP status
    #[error("Sesame service unavailable (status {0})")]
    UpstreamStatus(u16),

    /// The request never produced a response (DNS, connect, timeout, body read)
    #[error("Failed to contact Sesame service: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ResolverError {
    /// Whether the failure came from the upstream service rather than the name.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamStatus(_) | Self::Transport(_))
    }
}
