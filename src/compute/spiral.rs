//! Logarithmic spiral update moving each moth around its flame.
//!
//! In every dimension a moth lands at `D * exp(b*t) * cos(2*pi*t) + F`, where
//! `F` is the target flame coordinate, `D` the distance to the reference
//! flame and `t` a random angle in `[a, 1]`.

use std::f64::consts::PI;

use rayon::prelude::*;

use crate::schema::DistanceReference;

use super::{FlameArchive, Population};

/// Per-iteration parameters of the spiral update.
#[derive(Debug, Clone, Copy)]
pub struct SpiralParams {
    /// Number of flames moths may target individually.
    pub flame_count: usize,
    /// Decay parameter `a`; `t` is drawn from `[a, 1]`.
    pub decay: f64,
    /// Shape constant `b`.
    pub shape: f64,
    /// Flame the radius `D` is measured against.
    pub distance_reference: DistanceReference,
}

/// Index of the flame moth `agent` spirals around.
#[inline]
pub fn target_flame(agent: usize, flame_count: usize) -> usize {
    if agent < flame_count {
        agent
    } else {
        flame_count.saturating_sub(1)
    }
}

/// Map a unit draw `r` to the spiral angle `t = (a - 1) * r + 1`.
#[inline]
pub fn spiral_angle(decay: f64, r: f64) -> f64 {
    (decay - 1.0) * r + 1.0
}

/// One-dimensional spiral step around `flame` with radius `distance`.
#[inline]
pub fn spiral_point(distance: f64, flame: f64, t: f64, shape: f64) -> f64 {
    distance * (shape * t).exp() * (2.0 * PI * t).cos() + flame
}

/// Overwrite every moth with its spiral step.
///
/// `draws` holds one row of `U(0, 1)` values per moth, one per dimension.
/// Moths are updated in parallel; the result only depends on the inputs.
pub fn update_population(
    population: &mut Population,
    archive: &FlameArchive,
    draws: &[Vec<f64>],
    params: &SpiralParams,
) {
    let flames = archive.flames();

    population
        .positions_mut()
        .par_iter_mut()
        .zip(draws.par_iter())
        .enumerate()
        .for_each(|(agent, (moth, row))| {
            let target = &flames[target_flame(agent, params.flame_count)].position;
            let reference = match params.distance_reference {
                DistanceReference::TargetFlame => target,
                DistanceReference::MatchingRank => &flames[agent.min(flames.len() - 1)].position,
            };

            for (k, x) in moth.iter_mut().enumerate() {
                let distance = (reference[k] - *x).abs();
                let t = spiral_angle(params.decay, row[k]);
                *x = spiral_point(distance, target[k], t, params.shape);
            }
        });
}
