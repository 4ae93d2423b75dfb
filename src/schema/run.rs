//! Run configuration: an optimizer setup paired with a named benchmark.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Bound, OptimizerConfig};

/// Standard benchmark functions, all with a global minimum of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum Benchmark {
    /// `sum(x^2)`, minimum at the origin.
    #[default]
    Sphere,
    /// Highly multimodal, minimum at the origin.
    Rastrigin,
    /// Curved valley, minimum at `(1, ..., 1)`.
    Rosenbrock,
    /// Nearly flat outer region with a deep hole at the origin.
    Ackley,
    /// Product-of-cosines term, minimum at the origin.
    Griewank,
}

/// Configuration file consumed by the command-line runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Objective to minimize.
    #[serde(default)]
    pub objective: Benchmark,
    /// Optimizer settings.
    pub optimizer: OptimizerConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            objective: Benchmark::Sphere,
            optimizer: OptimizerConfig {
                search_agents: 30,
                dimensions: 10,
                lower_bound: Bound::Scalar(-100.0),
                upper_bound: Bound::Scalar(100.0),
                max_iterations: 1000,
                random_seed: Some(42),
                ..Default::default()
            },
        }
    }
}

impl RunConfig {
    /// Load and validate a JSON run configuration.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RunConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: RunConfig = serde_json::from_str(&contents)?;
        config.optimizer.validate()?;
        Ok(config)
    }
}

/// Errors loading a run configuration.
#[derive(Debug, thiserror::Error)]
pub enum RunConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid optimizer config: {0}")]
    Invalid(#[from] super::ConfigError),
}
