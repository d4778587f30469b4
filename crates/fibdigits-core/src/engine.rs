//! The engine trait implemented by every algorithm variant.

/// A Fibonacci engine: a pure, single-threaded computation from index to
/// decimal digit string. Engines do not validate the input domain; the
/// caller guarantees `k` is within its configured ceiling before invoking.
pub trait Engine: Send + Sync {
    /// Engine name for presentation and comparison reports.
    fn name(&self) -> &'static str;

    /// Compute F(k) rendered as decimal digits: no sign, no leading
    /// zeros except the single digit `"0"` for k = 0.
    fn compute(&self, k: u64) -> String;

    /// Highest index this engine is exact for, or `None` when it is exact
    /// over the whole input domain. Machine-word engines wrap silently
    /// beyond their limit, so orchestration must not compare them past it.
    fn exact_limit(&self) -> Option<u64> {
        None
    }
}
