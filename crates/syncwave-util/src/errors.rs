use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all syncwave operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SyncwaveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Syncwave.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Syncwave.toml for syntax errors"))]
    Manifest { message: String },

    /// Emitter graph resolution failed (dangling references, cycles, etc.).
    #[error("Emitter resolution failed: {message}")]
    Resolution { message: String },

    /// Writing generated output failed.
    #[error("Code generation failed: {message}")]
    Codegen { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SyncwaveResult<T> = miette::Result<T>;
