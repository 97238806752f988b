//! Metropolis acceptance rule and symmetric proposal probability.

use chainsim_grid::Direction;

/// Probability of proposing any one of the four neighbouring moves.
pub const PROPOSE_PROBABILITY: f64 = 1.0 / Direction::ALL.len() as f64;

/// Probability of accepting a move from a state of weight `current` to one
/// of weight `candidate`: `min(1, candidate / current)`.
///
/// A zero, negative or non-finite `current` weight has no defined ratio and
/// yields 0.0, so such a move is never accepted.
pub fn acceptance_probability(candidate: f64, current: f64) -> f64 {
    if !current.is_finite() || current <= 0.0 {
        return 0.0;
    }
    (candidate / current).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn propose_probability_is_quarter() {
        assert_eq!(PROPOSE_PROBABILITY, 0.25);
    }

    #[test]
    fn uphill_moves_always_accepted() {
        assert_eq!(acceptance_probability(0.2, 0.1), 1.0);
        assert_eq!(acceptance_probability(0.1, 0.1), 1.0);
    }

    #[test]
    fn downhill_moves_use_ratio() {
        assert!((acceptance_probability(0.05, 0.2) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn off_grid_candidate_rejected() {
        assert_eq!(acceptance_probability(0.0, 0.1), 0.0);
    }

    #[test]
    fn zero_current_weight_never_accepts() {
        assert_eq!(acceptance_probability(0.5, 0.0), 0.0);
        assert_eq!(acceptance_probability(0.0, 0.0), 0.0);
        assert_eq!(acceptance_probability(0.5, f64::NAN), 0.0);
        assert_eq!(acceptance_probability(0.5, -1.0), 0.0);
    }
}
