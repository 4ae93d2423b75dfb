//! Iteration schedules: flame count and spiral decay.
//!
//! Both shrink linearly over the run, moving the swarm from exploration
//! (many flames, wide spirals) to exploitation (one flame, tight spirals).

/// Number of flames moths may target at `iteration` (0-indexed):
/// `ceil(agents - (iteration + 1) * (agents - 1) / max_iterations)`.
///
/// Evaluated in integer arithmetic, so the last iteration yields exactly 1.
#[inline]
pub fn flame_count(iteration: usize, agents: usize, max_iterations: usize) -> usize {
    let max_iterations = max_iterations.max(1);
    let consumed = (iteration + 1) * agents.saturating_sub(1) / max_iterations;
    agents.saturating_sub(consumed).clamp(1, agents.max(1))
}

/// Spiral decay parameter `a` at `iteration`, falling linearly from just
/// below -1 to -2 on the last iteration.
#[inline]
pub fn spiral_decay(iteration: usize, max_iterations: usize) -> f64 {
    -1.0 + (iteration + 1) as f64 * (-1.0 / max_iterations as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flame_count_endpoints() {
        assert_eq!(flame_count(0, 30, 1000), 30);
        assert_eq!(flame_count(999, 30, 1000), 1);
        assert_eq!(flame_count(0, 10, 50), 10);
        assert_eq!(flame_count(49, 10, 50), 1);
    }

    #[test]
    fn test_flame_count_single_iteration() {
        assert_eq!(flame_count(0, 2, 1), 1);
        assert_eq!(flame_count(0, 10, 1), 1);
    }

    #[test]
    fn test_flame_count_matches_float_formula() {
        for (agents, max_iter) in [(10, 7), (5, 3), (30, 100), (2, 9)] {
            for i in 0..max_iter {
                let expected = (agents as f64
                    - (i + 1) as f64 * (agents - 1) as f64 / max_iter as f64)
                    .ceil() as usize;
                assert_eq!(flame_count(i, agents, max_iter), expected.max(1));
            }
        }
    }

    #[test]
    fn test_spiral_decay_range() {
        assert!((spiral_decay(0, 100) - (-1.01)).abs() < 1e-12);
        assert!((spiral_decay(99, 100) - (-2.0)).abs() < 1e-12);
        assert!((spiral_decay(0, 1) - (-2.0)).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_flame_count_monotone(agents in 2usize..200, max_iter in 1usize..300) {
            let mut prev = agents;
            for i in 0..max_iter {
                let n = flame_count(i, agents, max_iter);
                prop_assert!(n >= 1 && n <= agents);
                prop_assert!(n <= prev);
                prev = n;
            }
            prop_assert_eq!(flame_count(max_iter - 1, agents, max_iter), 1);
        }

        #[test]
        fn prop_spiral_decay_decreasing(max_iter in 1usize..500) {
            let mut prev = -1.0;
            for i in 0..max_iter {
                let a = spiral_decay(i, max_iter);
                prop_assert!(a < prev);
                prop_assert!(a >= -2.0 - 1e-12);
                prev = a;
            }
        }
    }
}
