//! Objective functions scored by the optimizer.
//!
//! The optimizer hands the objective the whole population at once; each row
//! is scored independently and lower values are better.

use std::f64::consts::{E, PI};

use rayon::prelude::*;

use crate::schema::Benchmark;

/// A batch objective: one fitness value per position row.
pub trait Objective {
    /// Score every position. Must return exactly one value per row.
    fn evaluate(&self, positions: &[Vec<f64>]) -> Vec<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[Vec<f64>]) -> Vec<f64>,
{
    fn evaluate(&self, positions: &[Vec<f64>]) -> Vec<f64> {
        self(positions)
    }
}

/// Adapts a per-position function into a batch objective.
///
/// Rows are scored in parallel; the output order always matches the input.
#[derive(Debug, Clone, Copy)]
pub struct PerAgent<F>(pub F);

impl<F> Objective for PerAgent<F>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    fn evaluate(&self, positions: &[Vec<f64>]) -> Vec<f64> {
        positions.par_iter().map(|p| (self.0)(p)).collect()
    }
}

impl Benchmark {
    /// Evaluate the function at a single position.
    pub fn value(&self, x: &[f64]) -> f64 {
        match self {
            Benchmark::Sphere => x.iter().map(|v| v * v).sum(),
            Benchmark::Rastrigin => {
                10.0 * x.len() as f64
                    + x.iter()
                        .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
                        .sum::<f64>()
            }
            Benchmark::Rosenbrock => x
                .windows(2)
                .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
                .sum(),
            Benchmark::Ackley => {
                if x.is_empty() {
                    return 0.0;
                }
                let n = x.len() as f64;
                let sum_sq = x.iter().map(|v| v * v).sum::<f64>() / n;
                let sum_cos = x.iter().map(|v| (2.0 * PI * v).cos()).sum::<f64>() / n;
                -20.0 * (-0.2 * sum_sq.sqrt()).exp() - sum_cos.exp() + 20.0 + E
            }
            Benchmark::Griewank => {
                let sum = x.iter().map(|v| v * v).sum::<f64>() / 4000.0;
                let product: f64 = x
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (v / ((i + 1) as f64).sqrt()).cos())
                    .product();
                sum - product + 1.0
            }
        }
    }
}

impl Objective for Benchmark {
    fn evaluate(&self, positions: &[Vec<f64>]) -> Vec<f64> {
        positions.par_iter().map(|p| self.value(p)).collect()
    }
}
