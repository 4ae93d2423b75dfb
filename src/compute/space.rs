//! Box-bounded search space.

use crate::schema::{OptimizerConfig, validate_bounds};

use super::OptimizeError;

/// Search space with per-dimension bounds.
///
/// Scalar bounds from the configuration are expanded to one entry per
/// dimension when the space is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpace {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl SearchSpace {
    /// Build a space from explicit per-dimension bounds.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, OptimizeError> {
        validate_bounds(&lower, &upper)?;
        Ok(Self { lower, upper })
    }

    /// Validate a configuration and build its search space.
    pub fn from_config(config: &OptimizerConfig) -> Result<Self, OptimizeError> {
        let (lower, upper) = config.expanded_bounds()?;
        Ok(Self { lower, upper })
    }

    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    /// Per-dimension lower bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Per-dimension upper bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Clamp a position into the box, returning a new position.
    pub fn clip(&self, position: &[f64]) -> Vec<f64> {
        let mut clipped = position.to_vec();
        self.clip_in_place(&mut clipped);
        clipped
    }

    /// Clamp a position into the box in place.
    #[inline]
    pub fn clip_in_place(&self, position: &mut [f64]) {
        for ((x, &lo), &hi) in position.iter_mut().zip(&self.lower).zip(&self.upper) {
            *x = x.clamp(lo, hi);
        }
    }

    /// Whether every coordinate lies inside the box.
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.dimensions()
            && position
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(x, (lo, hi))| (*lo..=*hi).contains(x))
    }
}
