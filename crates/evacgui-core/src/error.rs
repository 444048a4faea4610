//! Error types shared by the controller, processes and modules.

use crate::layer::LayerId;
use thiserror::Error;

/// Errors raised by the controller and the module lifecycle.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("render layer {0} does not exist")]
    UnknownLayer(LayerId),
    #[error("no primary shape render layer has been created")]
    NoPrimaryShapeLayer,
    #[error("no bounding box is available")]
    NoBoundingBox,
    #[error("no tool box has been installed")]
    NoToolBoxInstalled,
    #[error("invalid shape: {0}")]
    InvalidShape(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("process #{step} ({name}) failed: {source}")]
    ProcessFailed {
        step: usize,
        name: String,
        #[source]
        source: Box<ControllerError>,
    },
}

/// Result type for controller operations.
pub type Result<T> = std::result::Result<T, ControllerError>;

impl ControllerError {
    /// Unwrap nested process failures down to the error that caused them.
    pub fn root_cause(&self) -> &ControllerError {
        match self {
            ControllerError::ProcessFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_cause_unwraps_process_failures() {
        let err = ControllerError::ProcessFailed {
            step: 2,
            name: "load config".to_string(),
            source: Box::new(ControllerError::NoBoundingBox),
        };
        assert!(matches!(err.root_cause(), ControllerError::NoBoundingBox));
        assert_eq!(
            err.to_string(),
            "process #2 (load config) failed: no bounding box is available"
        );
    }
}
