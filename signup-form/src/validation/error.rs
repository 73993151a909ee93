use thiserror::Error;

/// Errors raised while building a [`Schema`](super::Schema).
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
