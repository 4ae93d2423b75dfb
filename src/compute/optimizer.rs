//! Moth-Flame optimizer - main driver for an optimization run.
//!
//! Orchestrates the per-iteration stages: clip, evaluate, merge flames,
//! record the convergence curve, then move every moth along its spiral.

use std::time::Instant;

use crate::schema::{IterationProgress, OptimizerConfig, OptimizerPhase, RunResult};

use super::{
    FlameArchive, Objective, OptimizeError, OptimizerRng, Population, SearchSpace, SpiralParams,
    flame_count, spiral_decay, update_population,
};

/// Moth-Flame optimizer.
///
/// Owns the population, flame archive and random source for one run.
/// A fresh optimizer is `Uninitialized`; `initialize` draws the population
/// and each `step` runs one iteration until the budget is spent.
pub struct MothFlameOptimizer {
    config: OptimizerConfig,
    space: SearchSpace,
    rng: OptimizerRng,
    population: Population,
    archive: FlameArchive,
    convergence_curve: Vec<f64>,
    phase: OptimizerPhase,
    evaluations: u64,
}

impl MothFlameOptimizer {
    /// Create a new optimizer, validating the configuration.
    pub fn new(config: OptimizerConfig) -> Result<Self, OptimizeError> {
        let space = SearchSpace::from_config(&config)?;
        let rng = match config.random_seed {
            Some(seed) => OptimizerRng::new(seed),
            None => OptimizerRng::random(),
        };

        Ok(Self {
            convergence_curve: Vec::with_capacity(config.max_iterations),
            config,
            space,
            rng,
            population: Population::from_positions(Vec::new()),
            archive: FlameArchive::default(),
            phase: OptimizerPhase::Uninitialized,
            evaluations: 0,
        })
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    pub fn phase(&self) -> OptimizerPhase {
        self.phase
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn archive(&self) -> &FlameArchive {
        &self.archive
    }

    pub fn convergence_curve(&self) -> &[f64] {
        &self.convergence_curve
    }

    /// Objective evaluations performed so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Draw the initial population.
    pub fn initialize(&mut self) {
        self.population =
            Population::random(self.config.search_agents, &self.space, &mut self.rng);
        self.archive = FlameArchive::default();
        self.convergence_curve.clear();
        self.evaluations = 0;
        self.phase = OptimizerPhase::Initialized;
    }

    /// Index of the next iteration to run, or `None` once finished.
    fn next_iteration(&self) -> Option<usize> {
        match self.phase {
            OptimizerPhase::Uninitialized | OptimizerPhase::Initialized => Some(0),
            OptimizerPhase::Iterating(i) => Some(i + 1),
            OptimizerPhase::Done => None,
        }
    }

    /// Score the population and check the objective's output.
    fn evaluate<O>(&mut self, objective: &O, iteration: usize) -> Result<Vec<f64>, OptimizeError>
    where
        O: Objective + ?Sized,
    {
        let fitness = objective.evaluate(self.population.positions());
        self.evaluations += self.population.len() as u64;

        if fitness.len() != self.population.len() {
            return Err(OptimizeError::ShapeMismatch {
                context: "objective fitness vector".to_string(),
                expected: self.population.len(),
                actual: fitness.len(),
            });
        }

        if let Some((agent, &value)) = fitness.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(OptimizeError::NonFiniteFitness {
                iteration,
                agent,
                value,
            });
        }

        Ok(fitness)
    }

    /// Run a single iteration.
    ///
    /// Initializes the population first if that has not happened yet.
    pub fn step<O>(&mut self, objective: &O) -> Result<IterationProgress, OptimizeError>
    where
        O: Objective + ?Sized,
    {
        let iteration = self.next_iteration().ok_or(OptimizeError::AlreadyFinished)?;
        if self.phase == OptimizerPhase::Uninitialized {
            self.initialize();
        }

        let agents = self.config.search_agents;
        let max_iterations = self.config.max_iterations;

        // Moths may have left the box during the last spiral update
        self.population.clip(&self.space);

        let fitness = self.evaluate(objective, iteration)?;
        let mean_fitness = fitness.iter().sum::<f64>() / fitness.len() as f64;

        if iteration == 0 {
            let (archive, order) = FlameArchive::from_population(&self.population, &fitness);
            self.population.reorder(&order);
            self.archive = archive;
        } else {
            self.archive.merge(&self.population, &fitness);
        }

        let best_fitness = self.best_fitness()?;
        self.convergence_curve.push(best_fitness);

        let params = SpiralParams {
            flame_count: flame_count(iteration, agents, max_iterations),
            decay: spiral_decay(iteration, max_iterations),
            shape: self.config.spiral_shape,
            distance_reference: self.config.distance_reference,
        };

        let draws = self.rng.unit_matrix(agents, self.space.dimensions());
        update_population(&mut self.population, &self.archive, &draws, &params);

        log::debug!(
            "Iteration {}/{}: best={:.6e}, mean={:.6e}, flames={}, a={:.4}",
            iteration + 1,
            max_iterations,
            best_fitness,
            mean_fitness,
            params.flame_count,
            params.decay
        );

        self.phase = if iteration + 1 >= max_iterations {
            OptimizerPhase::Done
        } else {
            OptimizerPhase::Iterating(iteration)
        };

        Ok(IterationProgress {
            iteration,
            total_iterations: max_iterations,
            flame_count: params.flame_count,
            spiral_decay: params.decay,
            best_fitness,
            mean_fitness,
            evaluations: self.evaluations,
        })
    }

    /// Fitness of the best flame.
    fn best_fitness(&self) -> Result<f64, OptimizeError> {
        self.archive
            .best()
            .map(|flame| flame.fitness)
            .ok_or_else(|| self.empty_archive())
    }

    fn empty_archive(&self) -> OptimizeError {
        OptimizeError::ShapeMismatch {
            context: "flame archive".to_string(),
            expected: self.config.search_agents,
            actual: self.archive.len(),
        }
    }

    /// Result built from the current archive.
    ///
    /// `None` until at least one iteration has completed.
    pub fn result(&self) -> Option<RunResult> {
        self.archive.best().map(|best| RunResult {
            best_fitness: best.fitness,
            best_position: best.position.clone(),
            convergence_curve: self.convergence_curve.clone(),
        })
    }

    /// Run the full iteration budget with a progress callback.
    pub fn run_with_callback<O, F>(
        &mut self,
        objective: &O,
        mut callback: F,
    ) -> Result<RunResult, OptimizeError>
    where
        O: Objective + ?Sized,
        F: FnMut(&IterationProgress),
    {
        let start_time = Instant::now();

        log::info!(
            "Starting moth-flame optimization: {} agents, {} dimensions, {} iterations",
            self.config.search_agents,
            self.space.dimensions(),
            self.config.max_iterations
        );

        self.initialize();
        while self.phase != OptimizerPhase::Done {
            let progress = self.step(objective)?;
            callback(&progress);
        }

        let result = self.result().ok_or_else(|| self.empty_archive())?;

        log::info!(
            "Optimization finished: best={:.6e} after {} evaluations in {:.3}s",
            result.best_fitness,
            self.evaluations,
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }

    /// Run the full iteration budget.
    pub fn run<O>(&mut self, objective: &O) -> Result<RunResult, OptimizeError>
    where
        O: Objective + ?Sized,
    {
        self.run_with_callback(objective, |_| {})
    }
}

/// Minimize `objective` over the configured box in one call.
pub fn optimize<O>(config: OptimizerConfig, objective: &O) -> Result<RunResult, OptimizeError>
where
    O: Objective + ?Sized,
{
    MothFlameOptimizer::new(config)?.run(objective)
}
