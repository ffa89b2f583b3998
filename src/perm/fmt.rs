use std::fmt;

use crate::{one_based::FmtOneBased, point::Point};

use super::Perm;

pub fn display_perm<Pt: Point>(
    perm: &Perm<Pt>,
    f: &mut fmt::Formatter<'_>,
    offset: usize,
) -> fmt::Result {
    perm.cycles().fmt_with_offset(f, offset)
}

pub fn debug_perm<Pt: Point>(
    perm: &Perm<Pt>,
    f: &mut fmt::Formatter<'_>,
    offset: usize,
) -> fmt::Result {
    if perm.degree() == 0 {
        write!(f, "()")?;
    } else {
        display_perm(perm, f, offset)?;
        // A trailing fixed point makes the degree visible
        let last_pt = Pt::from_index(perm.degree() - 1);
        if perm.image(last_pt) == last_pt {
            write!(f, "({})", last_pt.index() + offset)?;
        }
    }

    Ok(())
}

impl<Pt: Point> fmt::Display for Perm<Pt> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_perm(self, f, 0)
    }
}

impl<Pt: Point> fmt::Debug for Perm<Pt> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_perm(self, f, 0)
    }
}

impl<Pt: Point> FmtOneBased for Perm<Pt> {
    fn fmt_one_based(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_perm(self, f, 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::one_based::OneBased;

    use super::*;

    #[test]
    fn display_and_debug() {
        let perm = Perm::<u32>::from_images(vec![1, 3, 4, 2, 0]).unwrap();
        assert_eq!(perm.to_string(), "(0 1 3 2 4)");
        assert_eq!(OneBased(&perm).to_string(), "(1 2 4 3 5)");

        let fixed_tail = Perm::<u32>::from_images(vec![1, 0, 2]).unwrap();
        assert_eq!(format!("{:?}", fixed_tail), "(0 1)(2)");
        assert_eq!(format!("{:?}", Perm::<u32>::identity(0)), "()");
        assert_eq!(Perm::<u32>::identity(3).to_string(), "()");
    }
}
