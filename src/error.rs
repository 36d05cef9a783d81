//! Error types for the Wavefront FDTD solver.
//!
//! This module provides a unified error type [`FdtdError`]. The numerical
//! core only ever fails at setup time; everything after a successful
//! [`FieldSolver::initialize`](crate::FieldSolver::initialize) is infallible.

use thiserror::Error;

/// Result type alias using [`FdtdError`].
pub type Result<T> = std::result::Result<T, FdtdError>;

/// Unified error type for all Wavefront operations.
#[derive(Error, Debug)]
pub enum FdtdError {
    // ============ Setup Errors ============
    /// A configuration parameter violated its constraint
    #[error("Invalid configuration parameter '{param}': {message}")]
    InvalidConfiguration { param: String, message: String },

    // ============ I/O Errors ============
    /// Error reading a configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for [`SimulationConfig`](crate::SimulationConfig)
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    /// Error writing frames to the output stream
    #[error("Frame output error: {message}")]
    FrameOutputError { message: String },
}

impl FdtdError {
    /// Create an invalid configuration error
    pub fn invalid(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Create a frame output error
    pub fn frame_output(message: impl Into<String>) -> Self {
        Self::FrameOutputError {
            message: message.into(),
        }
    }

    /// Name of the offending parameter, if this is a configuration error.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::InvalidConfiguration { param, .. } => Some(param),
            _ => None,
        }
    }
}
