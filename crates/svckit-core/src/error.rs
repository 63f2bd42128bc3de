use thiserror::Error;

/// Unified error type for configuration and module composition.
#[derive(Error, Debug)]
pub enum ServiceError {
    // ── Precondition errors ────────────────────────────────────
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // ── Config errors ──────────────────────────────────────────
    #[error("config error: {0}")]
    Config(String),

    #[error("binding already configured: {0}")]
    DuplicateBinding(String),

    // ── Generic wrappers ───────────────────────────────────────
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
