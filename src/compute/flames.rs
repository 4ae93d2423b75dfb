//! Flame archive: the best positions found so far, kept sorted by fitness.

use std::cmp::Ordering;

use super::Population;

/// A retained position and its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct Flame {
    pub position: Vec<f64>,
    pub fitness: f64,
}

/// Elite archive of exactly as many flames as there are moths.
///
/// Flames are sorted ascending by fitness, so `flames()[0]` is always the
/// best position seen during the run.
#[derive(Debug, Clone, Default)]
pub struct FlameArchive {
    flames: Vec<Flame>,
}

impl FlameArchive {
    /// Build the initial archive from the first scored population.
    ///
    /// Returns the archive and the sort order applied, so the caller can
    /// reorder the population to match.
    pub fn from_population(population: &Population, fitness: &[f64]) -> (Self, Vec<usize>) {
        let mut order: Vec<usize> = (0..fitness.len()).collect();
        order.sort_by(|&a, &b| compare_fitness(fitness[a], fitness[b]));

        let flames = order
            .iter()
            .map(|&idx| Flame {
                position: population.positions()[idx].clone(),
                fitness: fitness[idx],
            })
            .collect();

        (Self { flames }, order)
    }

    /// Merge a freshly scored population into the archive.
    ///
    /// Flames and moths are pooled (flames first), stably sorted and cut back
    /// to the previous archive size. Equal fitness keeps the older entry ahead.
    pub fn merge(&mut self, population: &Population, fitness: &[f64]) {
        let capacity = self.flames.len();

        let mut pool: Vec<Flame> = std::mem::take(&mut self.flames);
        pool.extend(
            population
                .positions()
                .iter()
                .zip(fitness)
                .map(|(position, &fitness)| Flame {
                    position: position.clone(),
                    fitness,
                }),
        );

        pool.sort_by(|a, b| compare_fitness(a.fitness, b.fitness));
        pool.truncate(capacity);

        log::trace!(
            "Flame archive merged: best={:.6e}, worst={:.6e}",
            pool.first().map_or(f64::NAN, |f| f.fitness),
            pool.last().map_or(f64::NAN, |f| f.fitness)
        );

        self.flames = pool;
    }

    pub fn flames(&self) -> &[Flame] {
        &self.flames
    }

    /// Best flame, if the archive has been built.
    pub fn best(&self) -> Option<&Flame> {
        self.flames.first()
    }

    pub fn len(&self) -> usize {
        self.flames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flames.is_empty()
    }

    /// Whether flames are in ascending fitness order.
    pub fn is_sorted(&self) -> bool {
        self.flames.windows(2).all(|w| w[0].fitness <= w[1].fitness)
    }
}

/// Ascending fitness order. Fitness is validated finite before it gets here.
#[inline]
fn compare_fitness(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
