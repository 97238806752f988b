//! Error types for the chainsim-ctmc crate.

use chainsim_montecarlo::MonteCarloError;

/// Error type for all fallible operations in the chainsim-ctmc crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CtmcError {
    /// Returned when a transition is requested between labels that are not
    /// both in `{1, 2, 3}`.
    #[error("undefined transition: {from} -> {to} (states must be 1, 2 or 3)")]
    UndefinedTransition {
        /// Source label.
        from: u8,
        /// Destination label.
        to: u8,
    },

    /// Returned when a state label is outside `{1, 2, 3}`.
    #[error("invalid state label: {label} (must be 1, 2 or 3)")]
    InvalidStateLabel {
        /// The rejected label.
        label: u8,
    },

    /// Returned when a rate table does not have exactly six entries.
    #[error("rate table must have 6 entries, got {got}")]
    RateTableLength {
        /// Length of the supplied table.
        got: usize,
    },

    /// Returned when a rate is negative or non-finite.
    #[error("invalid rate at position {index}: {value} (must be finite and >= 0)")]
    InvalidRate {
        /// Zero-based position in the rate table.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a target time is negative or non-finite.
    #[error("invalid target time: {value} (must be finite and >= 0)")]
    InvalidTargetTime {
        /// The offending value.
        value: f64,
    },

    /// Returned when the rates admit no unique stationary distribution.
    #[error("rate table is reducible: no unique stationary distribution")]
    Reducible,

    /// The Monte-Carlo run was misconfigured.
    #[error(transparent)]
    MonteCarlo(#[from] MonteCarloError),
}
