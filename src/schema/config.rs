//! Configuration types for Moth-Flame optimization runs.

use serde::{Deserialize, Serialize};

/// Top-level optimizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Number of search agents (moths). Also the flame archive size.
    pub search_agents: usize,
    /// Dimensionality of the search space.
    pub dimensions: usize,
    /// Lower bound, scalar or one value per dimension.
    pub lower_bound: Bound,
    /// Upper bound, scalar or one value per dimension.
    pub upper_bound: Bound,
    /// Number of iterations. The loop always runs all of them.
    pub max_iterations: usize,
    /// Logarithmic spiral shape constant `b`.
    #[serde(default = "default_spiral_shape")]
    pub spiral_shape: f64,
    /// Flame the spiral radius is measured against.
    #[serde(default)]
    pub distance_reference: DistanceReference,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            search_agents: 30,
            dimensions: 10,
            lower_bound: Bound::Scalar(-100.0),
            upper_bound: Bound::Scalar(100.0),
            max_iterations: 1000,
            spiral_shape: default_spiral_shape(),
            distance_reference: DistanceReference::default(),
            random_seed: None,
        }
    }
}

fn default_spiral_shape() -> f64 {
    1.0
}

/// A box bound: one value broadcast to every dimension, or one per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Scalar(f64),
    PerDimension(Vec<f64>),
}

impl Bound {
    /// Expand to exactly `dim` values.
    ///
    /// A scalar is broadcast; a per-dimension bound must already have `dim`
    /// entries.
    pub fn expand(&self, dim: usize, which: BoundSide) -> Result<Vec<f64>, ConfigError> {
        match self {
            Bound::Scalar(v) => Ok(vec![*v; dim]),
            Bound::PerDimension(values) if values.len() == dim => Ok(values.clone()),
            Bound::PerDimension(values) => Err(ConfigError::BoundsShape {
                which,
                expected: dim,
                actual: values.len(),
            }),
        }
    }
}

impl From<f64> for Bound {
    fn from(value: f64) -> Self {
        Bound::Scalar(value)
    }
}

impl From<Vec<f64>> for Bound {
    fn from(values: Vec<f64>) -> Self {
        Bound::PerDimension(values)
    }
}

/// Which side of the box a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundSide {
    Lower,
    Upper,
}

impl std::fmt::Display for BoundSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundSide::Lower => write!(f, "lower"),
            BoundSide::Upper => write!(f, "upper"),
        }
    }
}

/// Flame used to measure the spiral radius `D` of each moth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceReference {
    /// Distance to the flame the moth spirals around.
    #[default]
    TargetFlame,
    /// Distance to the flame of the moth's own rank, even when the moth
    /// spirals around the last surviving flame.
    MatchingRank,
}

impl OptimizerConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.expanded_bounds().map(|_| ())
    }

    /// Validate and return the bounds expanded to `dimensions` entries each.
    pub fn expanded_bounds(&self) -> Result<(Vec<f64>, Vec<f64>), ConfigError> {
        if self.search_agents < 2 {
            return Err(ConfigError::PopulationTooSmall(self.search_agents));
        }
        if self.dimensions == 0 {
            return Err(ConfigError::NoDimensions);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if !self.spiral_shape.is_finite() {
            return Err(ConfigError::InvalidSpiralShape(self.spiral_shape));
        }

        let lower = self.lower_bound.expand(self.dimensions, BoundSide::Lower)?;
        let upper = self.upper_bound.expand(self.dimensions, BoundSide::Upper)?;

        validate_bounds(&lower, &upper)?;

        Ok((lower, upper))
    }
}

/// Check per-dimension bounds: equal lengths, finite values, `lower <= upper`
/// and a width that fits in an `f64`.
pub fn validate_bounds(lower: &[f64], upper: &[f64]) -> Result<(), ConfigError> {
    if lower.is_empty() {
        return Err(ConfigError::NoDimensions);
    }
    if upper.len() != lower.len() {
        return Err(ConfigError::BoundsShape {
            which: BoundSide::Upper,
            expected: lower.len(),
            actual: upper.len(),
        });
    }

    for (dimension, (&lo, &hi)) in lower.iter().zip(upper).enumerate() {
        if !lo.is_finite() || !hi.is_finite() {
            return Err(ConfigError::NonFiniteBound { dimension });
        }
        if lo > hi {
            return Err(ConfigError::InvertedBounds {
                dimension,
                lower: lo,
                upper: hi,
            });
        }
        if !(hi - lo).is_finite() {
            return Err(ConfigError::BoundRangeOverflow { dimension });
        }
    }

    Ok(())
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("At least 2 search agents are required, got {0}")]
    PopulationTooSmall(usize),
    #[error("Search space must have at least one dimension")]
    NoDimensions,
    #[error("Iteration count must be positive")]
    NoIterations,
    #[error("Spiral shape must be finite, got {0}")]
    InvalidSpiralShape(f64),
    #[error("Bound for dimension {dimension} is not finite")]
    NonFiniteBound { dimension: usize },
    #[error("Lower bound {lower} exceeds upper bound {upper} in dimension {dimension}")]
    InvertedBounds {
        dimension: usize,
        lower: f64,
        upper: f64,
    },
    #[error("Width of dimension {dimension} overflows f64")]
    BoundRangeOverflow { dimension: usize },
    #[error("{which} bound has {actual} entries, expected {expected}")]
    BoundsShape {
        which: BoundSide,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> OptimizerConfig {
        OptimizerConfig {
            search_agents: 5,
            dimensions: 3,
            max_iterations: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_valid() {
        assert!(OptimizerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_scalar_bound_broadcast() {
        let (lower, upper) = small_config().expanded_bounds().unwrap();
        assert_eq!(lower, vec![-100.0; 3]);
        assert_eq!(upper, vec![100.0; 3]);
    }

    #[test]
    fn test_rejects_small_population() {
        let config = OptimizerConfig {
            search_agents: 1,
            ..small_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_rejects_zero_dimensions_and_iterations() {
        let config = OptimizerConfig {
            dimensions: 0,
            ..small_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoDimensions));

        let config = OptimizerConfig {
            max_iterations: 0,
            ..small_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoIterations));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let config = OptimizerConfig {
            lower_bound: Bound::PerDimension(vec![0.0, 2.0, 0.0]),
            upper_bound: Bound::Scalar(1.0),
            ..small_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedBounds {
                dimension: 1,
                lower: 2.0,
                upper: 1.0,
            })
        );
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let config = OptimizerConfig {
            lower_bound: Bound::Scalar(1.0),
            upper_bound: Bound::Scalar(1.0),
            ..small_config()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_wrong_bound_length() {
        let config = OptimizerConfig {
            upper_bound: Bound::PerDimension(vec![1.0, 1.0]),
            ..small_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundsShape {
                which: BoundSide::Upper,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_bound() {
        let config = OptimizerConfig {
            lower_bound: Bound::Scalar(f64::NEG_INFINITY),
            ..small_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteBound { dimension: 0 })
        );
    }

    #[test]
    fn test_rejects_overflowing_range() {
        let config = OptimizerConfig {
            lower_bound: Bound::PerDimension(vec![0.0, -1e308, 0.0]),
            upper_bound: Bound::PerDimension(vec![1.0, 1e308, 1.0]),
            ..small_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoundRangeOverflow { dimension: 1 })
        );

        // The widest representable box is still accepted.
        assert!(validate_bounds(&[-f64::MAX / 2.0], &[f64::MAX / 2.0]).is_ok());
    }

    #[test]
    fn test_validate_bounds_lengths() {
        assert_eq!(validate_bounds(&[], &[]), Err(ConfigError::NoDimensions));
        assert_eq!(
            validate_bounds(&[0.0, 0.0], &[1.0]),
            Err(ConfigError::BoundsShape {
                which: BoundSide::Upper,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_serialization() {
        let json = r#"{
            "search_agents": 10,
            "dimensions": 2,
            "lower_bound": -5.0,
            "upper_bound": [5.0, 10.0],
            "max_iterations": 50
        }"#;
        let config: OptimizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lower_bound, Bound::Scalar(-5.0));
        assert_eq!(config.upper_bound, Bound::PerDimension(vec![5.0, 10.0]));
        assert_eq!(config.spiral_shape, 1.0);
        assert_eq!(config.distance_reference, DistanceReference::TargetFlame);
        assert_eq!(config.random_seed, None);

        let round = serde_json::to_string(&config).unwrap();
        let parsed: OptimizerConfig = serde_json::from_str(&round).unwrap();
        assert_eq!(parsed.upper_bound, config.upper_bound);
    }
}
