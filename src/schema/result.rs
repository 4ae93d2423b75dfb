//! Progress and result types for optimization runs.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of an optimizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OptimizerPhase {
    /// Configuration validated, no population yet.
    #[default]
    Uninitialized,
    /// Initial population drawn.
    Initialized,
    /// Iteration `n` (0-indexed) is the last one completed.
    Iterating(usize),
    /// All iterations completed.
    Done,
}

/// Snapshot emitted after each iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationProgress {
    /// Iteration just completed (0-indexed).
    pub iteration: usize,
    /// Total iterations planned.
    pub total_iterations: usize,
    /// Number of flames moths were allowed to target.
    pub flame_count: usize,
    /// Spiral decay parameter `a` used for the update.
    pub spiral_decay: f64,
    /// Best fitness found so far.
    pub best_fitness: f64,
    /// Mean fitness of the moths scored this iteration.
    pub mean_fitness: f64,
    /// Objective evaluations performed so far.
    pub evaluations: u64,
}

/// Final result of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Fitness of the best flame.
    pub best_fitness: f64,
    /// Position of the best flame.
    pub best_position: Vec<f64>,
    /// Best fitness recorded at every iteration.
    pub convergence_curve: Vec<f64>,
}
