use thiserror::Error;

/// Failures of the surrounding shell. Scoring itself never fails.
#[derive(Debug, Error)]
pub enum RiskError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RiskError>;
