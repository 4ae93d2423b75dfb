//! Owned random source for the optimizer.
//!
//! Every random draw made during a run goes through one `OptimizerRng`, in a
//! fixed order, so a seeded run is reproducible bit for bit.

use rand::prelude::*;
use rand_distr::Uniform;

use super::SearchSpace;

/// Random number generator wrapper for population and spiral draws.
pub struct OptimizerRng {
    rng: StdRng,
}

impl OptimizerRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform position inside the search space, drawn dimension by dimension.
    pub fn uniform_position(&mut self, space: &SearchSpace) -> Vec<f64> {
        space
            .lower()
            .iter()
            .zip(space.upper())
            .map(|(&lo, &hi)| self.uniform(lo, hi))
            .collect()
    }

    /// `rows x cols` matrix of `U(0, 1)` draws, filled row by row.
    pub fn unit_matrix(&mut self, rows: usize, cols: usize) -> Vec<Vec<f64>> {
        let unit: Uniform<f64> = Uniform::new(0.0, 1.0);
        (0..rows)
            .map(|_| (0..cols).map(|_| unit.sample(&mut self.rng)).collect())
            .collect()
    }

    /// Uniform random in `[lo, hi]`.
    ///
    /// Scales a unit draw so any finite `hi - lo` works, including widths
    /// `Uniform::new_inclusive(lo, hi)` would reject.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit: Uniform<f64> = Uniform::new_inclusive(0.0, 1.0);
        let r = unit.sample(&mut self.rng);
        (lo + r * (hi - lo)).clamp(lo, hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_draws_repeat() {
        let mut a = OptimizerRng::new(7);
        let mut b = OptimizerRng::new(7);
        assert_eq!(a.unit_matrix(4, 3), b.unit_matrix(4, 3));
    }

    #[test]
    fn test_unit_matrix_shape_and_range() {
        let mut rng = OptimizerRng::new(42);
        let matrix = rng.unit_matrix(5, 7);
        assert_eq!(matrix.len(), 5);
        for row in &matrix {
            assert_eq!(row.len(), 7);
            assert!(row.iter().all(|r| (0.0..1.0).contains(r)));
        }
    }

    #[test]
    fn test_uniform_position_in_space() {
        let space = SearchSpace::new(vec![-5.0, 10.0, 3.0], vec![5.0, 11.0, 3.0]).unwrap();
        let mut rng = OptimizerRng::random();
        for _ in 0..100 {
            let position = rng.uniform_position(&space);
            assert!(space.contains(&position));
            assert_eq!(position[2], 3.0);
        }
    }

    #[test]
    fn test_uniform_position_widest_box() {
        let space = SearchSpace::new(vec![-f64::MAX / 2.0], vec![f64::MAX / 2.0]).unwrap();
        let mut rng = OptimizerRng::new(9);
        for _ in 0..100 {
            let position = rng.uniform_position(&space);
            assert!(position[0].is_finite());
            assert!(space.contains(&position));
        }
    }
}
