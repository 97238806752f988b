//! Configuration for Monte-Carlo runs.

use crate::error::MonteCarloError;

/// Default number of independent trials per estimate.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Default number of independently seeded chunks a run is split into.
pub const DEFAULT_CHUNKS: usize = 64;

/// Size and seeding of a Monte-Carlo run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use chainsim_montecarlo::TrialConfig;
///
/// let config = TrialConfig::new()
///     .with_iterations(100_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialConfig {
    iterations: u64,
    seed: Option<u64>,
    n_chunks: usize,
}

impl TrialConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `iterations = 10_000_000`, `seed = None` (OS entropy),
    /// `n_chunks = 64`.
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            n_chunks: DEFAULT_CHUNKS,
        }
    }

    /// Sets the number of independent trials.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the master RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional master RNG seed (`None` draws one from the OS).
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the number of chunks the trials are split into.
    pub fn with_chunks(mut self, n_chunks: usize) -> Self {
        self.n_chunks = n_chunks;
        self
    }

    // --- Accessors ---

    /// Returns the number of independent trials.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Returns the master RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the number of chunks.
    pub fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), MonteCarloError> {
        if self.iterations == 0 {
            return Err(MonteCarloError::ZeroIterations);
        }
        if self.n_chunks == 0 {
            return Err(MonteCarloError::ZeroChunks);
        }
        Ok(())
    }

    /// Number of chunks a run actually uses: `n_chunks`, capped at the
    /// number of trials so no chunk is empty.
    pub fn effective_chunks(&self) -> u64 {
        u64::try_from(self.n_chunks)
            .unwrap_or(u64::MAX)
            .min(self.iterations)
            .max(1)
    }

    /// Splits `iterations` into [`effective_chunks`](Self::effective_chunks)
    /// lengths that differ by at most one.
    ///
    /// Earlier chunks receive the remainder. Lengths always sum to
    /// `iterations`.
    pub fn chunk_lengths(&self) -> Vec<u64> {
        let n = self.effective_chunks();
        let base = self.iterations / n;
        let rem = self.iterations % n;
        (0..n).map(|i| base + u64::from(i < rem)).collect()
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self::new()
    }
}
