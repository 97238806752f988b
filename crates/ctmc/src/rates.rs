//! Transition rate table.

use crate::error::CtmcError;
use crate::state::ChainState;

/// Six non-negative transition rates in the order
/// `[1→2, 1→3, 2→1, 2→3, 3→1, 3→2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    rates: [f64; 6],
}

impl RateTable {
    /// Creates a validated rate table.
    ///
    /// # Errors
    ///
    /// Returns [`CtmcError::InvalidRate`] for a negative or non-finite rate.
    pub fn new(rates: [f64; 6]) -> Result<Self, CtmcError> {
        if let Some((index, &value)) = rates
            .iter()
            .enumerate()
            .find(|(_, r)| !r.is_finite() || **r < 0.0)
        {
            return Err(CtmcError::InvalidRate { index, value });
        }
        Ok(Self { rates })
    }

    /// Creates a validated rate table from a slice.
    ///
    /// # Errors
    ///
    /// Returns [`CtmcError::RateTableLength`] unless `rates` has six entries,
    /// or [`CtmcError::InvalidRate`] for a negative or non-finite rate.
    pub fn from_slice(rates: &[f64]) -> Result<Self, CtmcError> {
        let array: [f64; 6] = rates
            .try_into()
            .map_err(|_| CtmcError::RateTableLength { got: rates.len() })?;
        Self::new(array)
    }

    /// Position of the `from → to` rate in the table, `None` for `from == to`.
    pub fn slot(from: ChainState, to: ChainState) -> Option<usize> {
        use ChainState::*;
        match (from, to) {
            (One, Two) => Some(0),
            (One, Three) => Some(1),
            (Two, One) => Some(2),
            (Two, Three) => Some(3),
            (Three, One) => Some(4),
            (Three, Two) => Some(5),
            (One, One) | (Two, Two) | (Three, Three) => None,
        }
    }

    /// Rate of jumping from `from` to `to` (0.0 for `from == to`).
    pub fn rate(&self, from: ChainState, to: ChainState) -> f64 {
        Self::slot(from, to).map_or(0.0, |i| self.rates[i])
    }

    /// Total rate of leaving `state`.
    pub fn propensity(&self, state: ChainState) -> f64 {
        let [a, b] = state.others();
        self.rate(state, a) + self.rate(state, b)
    }

    /// The raw rates in table order.
    pub fn as_array(&self) -> &[f64; 6] {
        &self.rates
    }
}
