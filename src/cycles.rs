//! Cycle decomposition of permutations.
use std::{
    borrow::Borrow,
    fmt::{self, Write},
};

use num_traits::{PrimInt, Unsigned};
use smallvec::SmallVec;
use tracing::trace;

use crate::{arith, error::Error, one_based::FmtOneBased, perm::Perm, point::Point};

/// Disjoint non-trivial cycles, stored as a flat sequence of points.
///
/// Cycles with fewer than two points are dropped when pushed.
#[derive(Default)]
pub struct Cycles<Pt: Point> {
    points: Vec<Pt>,
    ends: Vec<usize>,
}

impl<Pt: Point> Cycles<Pt> {
    /// Appends a cycle, unless it is a fixed point or empty.
    #[inline]
    pub fn push(&mut self, cycle: impl IntoIterator<Item = impl Borrow<Pt>>) {
        let last_end = self.points.len();
        self.points.extend(cycle.into_iter().map(|x| *x.borrow()));
        let new_end = self.points.len();
        if last_end + 1 >= new_end {
            self.points.truncate(last_end);
        } else {
            self.ends.push(self.points.len());
        }
    }

    /// Returns an iterator over the cycles' points.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Pt> {
        Iter {
            points: &self.points,
            offset: 0,
            ends: &self.ends,
        }
    }

    /// Returns the number of cycles.
    #[inline]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Returns `true` when there are no non-trivial cycles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// Writes the cycles in cycle notation, adding `offset` to every point.
    pub fn fmt_with_offset(&self, f: &mut fmt::Formatter<'_>, offset: usize) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("()");
        }
        for cycle in self {
            let mut sep = '(';
            for pt in cycle {
                f.write_char(sep)?;
                sep = ' ';
                fmt::Display::fmt(&(pt.index() + offset), f)?;
            }
            f.write_char(')')?;
        }
        Ok(())
    }
}

impl<'a, Pt: Point> IntoIterator for &'a Cycles<Pt> {
    type Item = &'a [Pt];

    type IntoIter = Iter<'a, Pt>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cycles of [`Cycles`].
pub struct Iter<'a, Pt: Point> {
    points: &'a [Pt],
    ends: &'a [usize],
    offset: usize,
}

impl<'a, Pt: Point> Iterator for Iter<'a, Pt> {
    type Item = &'a [Pt];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (&next_end, ends) = self.ends.split_first()?;
        let len = next_end - self.offset;
        self.ends = ends;
        self.offset = next_end;

        let (next_cycle, points) = self.points.split_at(len);
        self.points = points;

        Some(next_cycle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ends.len(), Some(self.ends.len()))
    }
}

impl<'a, Pt: Point> ExactSizeIterator for Iter<'a, Pt> {}

impl<Pt: Point> fmt::Debug for Cycles<Pt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<Pt: Point> fmt::Display for Cycles<Pt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_offset(f, 0)
    }
}

impl<Pt: Point> FmtOneBased for Cycles<Pt> {
    fn fmt_one_based(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_offset(f, 1)
    }
}

/// Lengths of all cycles of a permutation, fixed points included.
///
/// The lengths sum up to the degree of the permutation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CycleType {
    lengths: SmallVec<[usize; 8]>,
}

impl CycleType {
    /// Returns the cycle lengths in order of each cycle's smallest point.
    #[inline]
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Returns the number of cycles.
    #[inline]
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Returns `true` for the cycle type of a degree-0 permutation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Returns the number of points, i.e. the sum of all cycle lengths.
    pub fn degree(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Returns the number of fixed points.
    pub fn fixed_points(&self) -> usize {
        self.lengths.iter().filter(|&&length| length == 1).count()
    }

    /// Returns the least common multiple of all cycle lengths.
    ///
    /// This is the order of the permutation. Fixed points do not change the result and are
    /// skipped. Returns [`Error::Overflow`] if the result does not fit into `T`.
    pub fn order<T: PrimInt + Unsigned>(&self) -> Result<T, Error> {
        arith::reduce(self.lengths.iter().copied().filter(|&length| length > 1))
    }
}

impl fmt::Debug for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lengths.iter()).finish()
    }
}

/// Returns the cycle type of `perm`.
///
/// Visited points are tracked in a separate bitmap, `perm` is not modified.
pub fn decompose<Pt: Point>(perm: &Perm<Pt>) -> CycleType {
    let mut cycle_type = CycleType::default();
    let mut seen = vec![false; perm.degree()];

    for start in 0..perm.degree() {
        if seen[start] {
            continue;
        }
        let mut length = 0;
        let mut index = start;
        while !seen[index] {
            seen[index] = true;
            length += 1;
            index = perm.image_of_index(index).index();
        }
        if length > 1 {
            trace!(start, length, "found cycle");
        }
        cycle_type.lengths.push(length);
    }

    cycle_type
}
