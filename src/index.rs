//! Integer widths for storing slot positions.

use core::fmt;

/// Integer type used to store a list's `head`, `tail` and capacity.
///
/// Narrow widths shrink the list header at the cost of a lower capacity
/// ceiling, see [`max_capacity`](Index::max_capacity).
pub trait Index: PartialEq + Copy + fmt::Debug {
    /// Widens `self` to `usize`.
    fn to_usize(self) -> usize;
    /// Narrows `ix` to `Self`. `ix` never exceeds `max_capacity()`.
    fn from(ix: usize) -> Self;
    /// Largest capacity (in slots) a list indexed by `Self` can hold.
    fn max_capacity() -> usize;
}

macro_rules! impl_index {
    ($($t:ty),*) => {$(
        impl Index for $t {
            #[inline(always)]
            fn to_usize(self) -> usize {
                self as usize
            }

            // Truncates: callers keep `ix` within `max_capacity()`.
            #[inline(always)]
            fn from(ix: usize) -> Self {
                debug_assert!(ix <= Self::max_capacity(),
                              "index {} does not fit {}", ix, stringify!($t));
                ix as $t
            }

            #[inline(always)]
            fn max_capacity() -> usize {
                if <$t>::max_value() as u128 >= usize::max_value() as u128 {
                    usize::max_value()
                } else {
                    <$t>::max_value() as usize
                }
            }
        }
    )*}
}

impl_index!(u8, u16, u32, u64, usize);
