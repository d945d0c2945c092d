//! Pool configuration parameters.

/// Configuration for a shared list pool.
///
/// Consumed exactly once, when the pool is constructed. Lists created from
/// the pool afterwards share the capacity and growth policy as-is — there
/// is no per-list re-configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoolConfig {
    /// Number of slots allocated up front.
    ///
    /// Default: 64. Zero is permitted: the free chain starts empty and the
    /// first insertion triggers a growth step, which applies the growth
    /// formula to capacity 0 (so a zero additive with any multiplier
    /// cannot get off the ground and the insert fails).
    pub initial_capacity: u32,

    /// Capacity multiplier applied when the free chain is exhausted.
    ///
    /// Default: 2.0. Values ≤ 1.0 are accepted here; combined with a zero
    /// [`additive`](Self::growth_additive) they surface as a
    /// `PoolExhausted` error at the insertion that needs more space, never
    /// as a silent non-growth.
    pub growth_multiplier: f64,

    /// Fixed slot count added on top of the multiplied capacity.
    ///
    /// Default: 0.
    pub growth_additive: u32,
}

impl PoolConfig {
    /// Default initial capacity.
    pub const DEFAULT_CAPACITY: u32 = 64;

    /// Default growth multiplier.
    pub const DEFAULT_MULTIPLIER: f64 = 2.0;

    /// Default growth additive.
    pub const DEFAULT_ADDITIVE: u32 = 0;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: u32) -> Self {
        Self {
            initial_capacity,
            growth_multiplier: Self::DEFAULT_MULTIPLIER,
            growth_additive: Self::DEFAULT_ADDITIVE,
        }
    }

    /// Create a config with explicit growth parameters.
    pub fn with_growth(initial_capacity: u32, multiplier: f64, additive: u32) -> Self {
        Self {
            initial_capacity,
            growth_multiplier: multiplier,
            growth_additive: additive,
        }
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
