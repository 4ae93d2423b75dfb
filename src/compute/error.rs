//! Error type for optimization runs.

use crate::schema::ConfigError;

/// Errors raised while setting up or running the optimizer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigError),

    #[error("Shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    #[error("Objective returned non-finite fitness {value} for agent {agent} at iteration {iteration}")]
    NonFiniteFitness {
        iteration: usize,
        agent: usize,
        value: f64,
    },

    #[error("Optimizer has already completed all iterations")]
    AlreadyFinished,
}

impl From<ConfigError> for OptimizeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::BoundsShape {
                which,
                expected,
                actual,
            } => OptimizeError::ShapeMismatch {
                context: format!("{} bound", which),
                expected,
                actual,
            },
            other => OptimizeError::InvalidConfiguration(other),
        }
    }
}
