//! Embedded-chain jump probabilities.

use rand::Rng;

use crate::error::CtmcError;
use crate::rates::RateTable;
use crate::state::ChainState;

/// Probability that the next jump out of `from` lands in `to`:
/// `rate(from → to) / propensity(from)`.
///
/// Returns 0.0 for `from == to` (the embedded chain has no self-loops) and
/// for an absorbing `from` whose propensity is zero.
pub fn jump_probability(rates: &RateTable, from: ChainState, to: ChainState) -> f64 {
    let propensity = rates.propensity(from);
    if propensity <= 0.0 {
        return 0.0;
    }
    rates.rate(from, to) / propensity
}

/// Label-based form of [`jump_probability`] over a raw six-entry rate slice.
///
/// # Errors
///
/// Returns [`CtmcError::UndefinedTransition`] if `s1` or `s2` is not in
/// `{1, 2, 3}`, or a rate-table error if `rates` is invalid.
pub fn continuous_transition_probability(
    s1: u8,
    s2: u8,
    rates: &[f64],
) -> Result<f64, CtmcError> {
    let undefined = |_| CtmcError::UndefinedTransition { from: s1, to: s2 };
    let from = ChainState::try_from(s1).map_err(undefined)?;
    let to = ChainState::try_from(s2).map_err(undefined)?;
    let table = RateTable::from_slice(rates)?;
    Ok(jump_probability(&table, from, to))
}

/// Draws the state the chain jumps to from `current` by tower sampling.
///
/// A single uniform draw `u` is compared against the jump probability of the
/// lower-labelled other state; `u` below it selects that state, otherwise the
/// remaining one.
pub fn sample_next_state<R: Rng + ?Sized>(
    rates: &RateTable,
    current: ChainState,
    rng: &mut R,
) -> ChainState {
    let [first, second] = current.others();
    let threshold = jump_probability(rates, current, first);
    let u: f64 = rng.random();
    if u < threshold { first } else { second }
}
