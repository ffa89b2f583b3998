//! Displaying positions as 1-based card numbers.
//!
//! Positions are 0-based throughout this crate, while a deck is usually described with the top
//! card being card `1`. Wrapping a value in [`OneBased`] formats it with that labelling, e.g. the
//! permutation of a five card deal is displayed as `(1 2 4 3 5)`.
use std::fmt;

/// Wrapper type that formats the contained type with 1-based positions.
pub struct OneBased<T>(pub T);

impl<T: FmtOneBased> fmt::Display for OneBased<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_one_based(f)
    }
}

impl<T: FmtOneBased> fmt::Debug for OneBased<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_one_based(f)
    }
}

/// Displays a type using 1-based positions.
pub trait FmtOneBased {
    /// Displays a type using 1-based positions.
    fn fmt_one_based(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T> FmtOneBased for &'_ T
where
    T: FmtOneBased,
{
    fn fmt_one_based(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::fmt_one_based(self, f)
    }
}
