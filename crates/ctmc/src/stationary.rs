//! Long-run distribution of the three-state chain.

use crate::error::CtmcError;
use crate::rates::RateTable;
use crate::state::ChainState;

/// Time-stationary distribution `pi` with `pi Q = 0`.
///
/// Uses the matrix-tree formula: the weight of state `i` is the sum, over the
/// three spanning trees directed into `i`, of the product of their edge rates.
/// For three states:
///
/// ```text
/// w1 = q21 q31 + q21 q32 + q23 q31
/// w2 = q12 q32 + q12 q31 + q13 q32
/// w3 = q13 q23 + q13 q21 + q12 q23
/// ```
///
/// # Errors
///
/// Returns [`CtmcError::Reducible`] if every weight is zero.
pub fn stationary_distribution(rates: &RateTable) -> Result<[f64; 3], CtmcError> {
    use ChainState::*;
    let q = |a, b| rates.rate(a, b);

    let weights = [
        q(Two, One) * q(Three, One) + q(Two, One) * q(Three, Two) + q(Two, Three) * q(Three, One),
        q(One, Two) * q(Three, Two) + q(One, Two) * q(Three, One) + q(One, Three) * q(Three, Two),
        q(One, Three) * q(Two, Three) + q(One, Three) * q(Two, One) + q(One, Two) * q(Two, Three),
    ];
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(CtmcError::Reducible);
    }
    Ok(weights.map(|w| w / total))
}
