//! Moth-Flame Optimization - spiral-search metaheuristic for bounded
//! continuous minimization.
//!
//! A population of moths explores a box-bounded search space. Every
//! iteration the best positions seen so far are kept as a sorted archive of
//! flames, and each moth flies a logarithmic spiral around its assigned
//! flame. The number of flames shrinks linearly to one over the run, moving
//! the swarm from exploration to exploitation.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration, progress and result types (serde)
//! - `compute`: Numerical core (search space, flame archive, spiral update,
//!   optimizer loop)
//!
//! # Example
//!
//! ```rust,no_run
//! use moth_flame::{
//!     compute::{MothFlameOptimizer, PerAgent},
//!     schema::{Bound, OptimizerConfig},
//! };
//!
//! let config = OptimizerConfig {
//!     search_agents: 10,
//!     dimensions: 2,
//!     lower_bound: Bound::Scalar(-5.0),
//!     upper_bound: Bound::Scalar(5.0),
//!     max_iterations: 50,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let objective = PerAgent(|x: &[f64]| x.iter().map(|v| v * v).sum::<f64>());
//! let mut optimizer = MothFlameOptimizer::new(config)?;
//! let result = optimizer.run(&objective)?;
//!
//! println!("Best fitness: {:.3e} at {:?}", result.best_fitness, result.best_position);
//! # Ok::<(), moth_flame::compute::OptimizeError>(())
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{MothFlameOptimizer, Objective, OptimizeError, PerAgent, optimize};
pub use schema::{Benchmark, Bound, OptimizerConfig, RunConfig, RunResult};
