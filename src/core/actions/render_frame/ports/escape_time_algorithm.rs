use crate::core::data::complex::Complex;

/// A pure escape-time recurrence. Implementations hold no shared mutable
/// state and may be called from any number of threads at once.
pub trait EscapeTimeAlgorithm {
    /// Iterations taken before `|z| > 2`, or `max_iterations()` when the
    /// orbit stays bounded.
    fn escape_time(&self, z0: Complex) -> u32;

    fn max_iterations(&self) -> u32;
}
