//! Permutations of card positions.

use crate::{
    cycles::{self, CycleType, Cycles},
    error::Error,
    point::Point,
};

mod fmt;

/// A permutation of the positions `0..degree`.
///
/// For a permutation describing a shuffle, the image of position `i` is the position the card now
/// at `i` was taken from. See [`Perm::apply`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Perm<Pt: Point> {
    // Always a bijection on `0..images.len()`.
    images: Vec<Pt>,
}

impl<Pt: Point> Perm<Pt> {
    /// Creates a `Perm` from a vector of point images.
    ///
    /// Returns `None` when `images` is not a permutation of `0..images.len()` or when its length
    /// exceeds `Pt::MAX_DEGREE`.
    pub fn from_images(images: Vec<Pt>) -> Option<Self> {
        is_perm(&images).then(|| Perm { images })
    }

    /// Creates a `Perm` from images known to form a permutation.
    #[inline]
    pub(crate) fn from_images_unchecked(images: Vec<Pt>) -> Self {
        debug_assert!(is_perm(&images));
        Perm { images }
    }

    /// Returns the identity permutation of the given degree.
    ///
    /// Panics if `degree` exceeds `Pt::MAX_DEGREE`.
    pub fn identity(degree: usize) -> Self {
        assert!(degree <= Pt::MAX_DEGREE);
        Perm {
            images: (0..degree).map(Pt::from_index).collect(),
        }
    }

    /// Returns the size of the set the permutation acts on.
    #[inline(always)]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// Returns a slice containing the images of `0..self.degree()`.
    #[inline(always)]
    pub fn images(&self) -> &[Pt] {
        &self.images
    }

    /// Returns the image of the point with the given `index`.
    ///
    /// Points outside of the permutation's domain are fixed.
    #[inline]
    pub fn image_of_index(&self, index: usize) -> Pt {
        match self.images.get(index) {
            Some(&image) => image,
            None => Pt::from_index(index),
        }
    }

    /// Returns the image of a point under the permutation.
    #[inline(always)]
    pub fn image(&self, point: Pt) -> Pt {
        self.image_of_index(point.index())
    }

    /// Returns `true` if every point is fixed.
    pub fn is_identity(&self) -> bool {
        self.images
            .iter()
            .enumerate()
            .all(|(index, image)| index == image.index())
    }

    /// Rearranges a sequence of `self.degree()` items as one application of this permutation.
    ///
    /// Item `i` of the result is item `self.image_of_index(i)` of `items`.
    ///
    /// Panics if `items` has a length different from the permutation's degree.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        assert_eq!(items.len(), self.degree(), "cannot apply permutation of different degree");
        self.images
            .iter()
            .map(|image| items[image.index()].clone())
            .collect()
    }

    /// Returns the non-trivial cycles of this permutation.
    ///
    /// Each cycle starts with its smallest point and cycles are ordered by their starting point.
    pub fn cycles(&self) -> Cycles<Pt> {
        let mut cycles = Cycles::default();
        let mut seen = vec![false; self.degree()];
        let mut cycle = vec![];

        for start in 0..self.degree() {
            if seen[start] {
                continue;
            }
            cycle.clear();
            let mut index = start;
            while !seen[index] {
                seen[index] = true;
                cycle.push(Pt::from_index(index));
                index = self.images[index].index();
            }
            cycles.push(&cycle);
        }

        cycles
    }

    /// Returns the lengths of all cycles of this permutation, including fixed points.
    #[inline]
    pub fn cycle_type(&self) -> CycleType {
        cycles::decompose(self)
    }

    /// Returns the smallest positive number of applications that yield the identity.
    ///
    /// Returns [`Error::Overflow`] when the order does not fit into `T`.
    pub fn order<T: num_traits::PrimInt + num_traits::Unsigned>(&self) -> Result<T, Error> {
        self.cycle_type().order()
    }
}

/// Checks whether `images` is a permutation of `0..images.len()`.
fn is_perm<Pt: Point>(images: &[Pt]) -> bool {
    if images.len() > Pt::MAX_DEGREE {
        return false;
    }
    let mut seen = vec![false; images.len()];
    for image in images {
        match seen.get_mut(image.index()) {
            Some(seen_image) if !*seen_image => *seen_image = true,
            _ => return false,
        }
    }
    true
}
