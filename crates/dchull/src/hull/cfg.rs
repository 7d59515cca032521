//! Run configuration for the divide-and-conquer driver.

/// Driver configuration.
///
/// `parallel_threshold` only matters with the `parallel` feature: ranges with
/// at least this many points fork their two halves onto the rayon pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullCfg {
    pub parallel_threshold: usize,
}

impl HullCfg {
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    /// Sequential everywhere, regardless of enabled features.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
        }
    }
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
