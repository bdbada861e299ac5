//! Error type for the few fallible surfaces of the crate.
//!
//! Window-management commands never fail: unknown handles, duplicate
//! activations and degenerate geometry all degrade to no-ops. Errors are
//! reserved for configuration validation and the terminal host's I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MdiError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MdiError>;
