//! Moth population: the current set of candidate positions.

use super::{OptimizerRng, SearchSpace};

/// Positions of all moths, one row per search agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    positions: Vec<Vec<f64>>,
}

impl Population {
    /// Draw `size` positions uniformly inside the search space.
    pub fn random(size: usize, space: &SearchSpace, rng: &mut OptimizerRng) -> Self {
        let positions = (0..size).map(|_| rng.uniform_position(space)).collect();
        Self { positions }
    }

    /// Wrap existing positions.
    pub fn from_positions(positions: Vec<Vec<f64>>) -> Self {
        Self { positions }
    }

    /// Number of moths.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec<f64>] {
        &self.positions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.positions
    }

    /// Pull every moth back inside the search space.
    pub fn clip(&mut self, space: &SearchSpace) {
        for position in &mut self.positions {
            space.clip_in_place(position);
        }
    }

    /// Reorder moths so that row `k` becomes the old row `order[k]`.
    pub fn reorder(&mut self, order: &[usize]) {
        let mut old: Vec<Option<Vec<f64>>> = self.positions.drain(..).map(Some).collect();
        self.positions = order
            .iter()
            .filter_map(|&idx| old.get_mut(idx).and_then(Option::take))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_population_shape() {
        let space = SearchSpace::new(vec![-5.0; 3], vec![5.0; 3]).unwrap();
        let mut rng = OptimizerRng::new(42);
        let population = Population::random(8, &space, &mut rng);

        assert_eq!(population.len(), 8);
        for position in population.positions() {
            assert_eq!(position.len(), 3);
            assert!(space.contains(position));
        }
    }

    #[test]
    fn test_clip_population() {
        let space = SearchSpace::new(vec![0.0, 0.0], vec![1.0, 1.0]).unwrap();
        let mut population =
            Population::from_positions(vec![vec![-1.0, 0.5], vec![2.0, 3.0], vec![0.25, 0.75]]);
        population.clip(&space);

        assert_eq!(
            population.positions(),
            &[vec![0.0, 0.5], vec![1.0, 1.0], vec![0.25, 0.75]]
        );
    }

    #[test]
    fn test_reorder() {
        let mut population =
            Population::from_positions(vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]]);
        population.reorder(&[2, 0, 3, 1]);
        assert_eq!(
            population.positions(),
            &[vec![2.0], vec![0.0], vec![3.0], vec![1.0]]
        );
    }
}
