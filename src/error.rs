//! Application-wide error types.
//!
//! Archive failures never surface here: each source isolates them as
//! [`SourceError`](crate::catalog::SourceError) and the catalog only shrinks.
//! This type covers the things around the catalog that can genuinely fail:
//! configuration files, output encoding and user input.
//!
//! The CLI wraps these in `anyhow` for convenient propagation.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Output encoding error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Unrecognized user input (region, era, sort order)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::config::ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, serde_json::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Serialize(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("unknown region 'Atlantis'");
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::invalid_argument("bad era").context("while parsing filters");
        let msg = err.to_string();
        assert!(msg.contains("while parsing filters"));
        assert!(msg.contains("bad era"));
    }

    #[test]
    fn test_result_ext() {
        let result: Result<()> = Err(Error::invalid_argument("test"));
        let with_ctx = result.with_context("additional context");
        assert!(with_ctx.unwrap_err().to_string().contains("additional context"));
    }

    #[test]
    fn test_config_error_converts() {
        let result: std::result::Result<(), crate::config::ConfigError> =
            Err(crate::config::ConfigError::NoConfigDir);
        let err = result.with_context("saving key").unwrap_err();
        assert!(err.to_string().contains("saving key"));
    }
}
