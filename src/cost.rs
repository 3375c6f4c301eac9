/// Edge costs and heuristic estimates.
///
/// Costs are unsigned, so negative weights can't be expressed at all. The
/// maximum value is reserved as the "unknown" sentinel for missing edges and
/// heuristics, and every sum goes through `SaturatingAdd` so the sentinel
/// absorbs instead of wrapping around.
///
/// ```
/// use graph_search::cost::Cost;
///
/// assert!(3u32.valid());
/// assert!(!u32::MAX.valid());
/// assert_eq!(u32::MAX.plus(1), u32::MAX);
/// ```
pub trait Cost:
    Copy
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + core::cmp::Eq
    + PartialOrd
    + Ord
    + std::hash::Hash
    + num_traits::SaturatingAdd
    + num_traits::bounds::UpperBounded
    + num_traits::Zero
    + std::ops::Add<Self, Output = Self>
{
    /// Whether this is a known cost rather than the sentinel.
    #[inline(always)]
    fn valid(&self) -> bool {
        *self != num_traits::bounds::UpperBounded::max_value()
    }

    /// The "unknown" sentinel.
    #[inline(always)]
    fn sentinel() -> Self {
        num_traits::bounds::UpperBounded::max_value()
    }

    #[inline(always)]
    #[must_use]
    fn plus(self, other: Self) -> Self {
        self.saturating_add(&other)
    }
}

impl Cost for u8 {}
impl Cost for u16 {}
impl Cost for u32 {}
impl Cost for u64 {}
impl Cost for usize {}
