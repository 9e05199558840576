//! Error types for Preflight operations.
//!
//! This module defines [`PreflightError`] and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! Probes never surface errors: a tool that is absent, erroring, or
//! unreadable all collapse into a `false` check result. `PreflightError`
//! exists for the output path only — writing the report to a sink can
//! fail, and that failure is propagated rather than swallowed.

use thiserror::Error;

/// Core error type for Preflight operations.
#[derive(Debug, Error)]
pub enum PreflightError {
    /// IO error wrapper (report rendering).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Preflight operations.
pub type Result<T> = std::result::Result<T, PreflightError>;
