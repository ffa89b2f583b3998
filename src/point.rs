//! Card positions within a deck.
use std::{fmt, hash::Hash};

pub(crate) mod sealed {
    pub trait Sealed {}
}

#[cfg(not(any(target_pointer_width = "64", target_pointer_width = "32")))]
compile_error!(
    r#"The underdeal crate only supports target_pointer_width = "32" and target_pointer_width = "64""#
);

/// Unsigned primitive integer types used to store card positions.
///
/// Positions are stored 0-based: the top card of a deck is at position `0`. User facing output
/// labels positions 1-based, see [`crate::one_based`].
///
/// This trait is sealed and only implemented for unsigned primitive integer types.
pub trait Point:
    Copy + Clone + Default + Ord + Hash + fmt::Display + fmt::Debug + sealed::Sealed + 'static
{
    /// Maximal number of positions a permutation using this type can act on.
    const MAX_DEGREE: usize;

    /// Width of the type in bits.
    const BITS: u32;

    /// Returns the index of the position.
    ///
    /// The index is equal to the position but always a `usize`.
    fn index(self) -> usize;

    /// Returns the position with a given index.
    ///
    /// If `index` is not below [`Self::MAX_DEGREE`] an arbitrary position is returned.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_pt {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Point for $t {
                const MAX_DEGREE: usize = {
                    if (<$t>::MAX as usize) < (isize::MAX as usize) / std::mem::size_of::<$t>() {
                        (<$t>::MAX as usize).wrapping_add(1)
                    } else {
                        ((isize::MAX as usize) / std::mem::size_of::<$t>())
                    }
                };

                const BITS: u32 = <$t>::BITS;

                #[inline(always)]
                fn index(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    index as $t
                }
            }
        )*
    };
}

impl_pt!(u16, u32);

#[cfg(target_pointer_width = "64")]
impl_pt!(u64);
