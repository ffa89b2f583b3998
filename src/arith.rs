//! GCD and LCM of cycle lengths.
use num_traits::{NumCast, PrimInt, Unsigned};

use crate::error::Error;

/// Returns the greatest common divisor of `u` and `v`.
///
/// Uses the binary GCD algorithm (Stein's algorithm) which only needs shifts, subtractions and
/// comparisons. `gcd(0, v) == v`, `gcd(u, 0) == u` and in particular `gcd(0, 0) == 0`.
pub fn gcd<T: PrimInt + Unsigned>(mut u: T, mut v: T) -> T {
    if u.is_zero() {
        return v;
    }
    if v.is_zero() {
        return u;
    }

    // Largest power of two dividing both
    let shift = (u | v).trailing_zeros() as usize;
    u = u >> shift;
    v = v >> shift;

    u = u >> u.trailing_zeros() as usize;

    // u is odd from here on
    loop {
        v = v >> v.trailing_zeros() as usize;

        if u > v {
            std::mem::swap(&mut u, &mut v);
        }
        v = v - u;

        if v.is_zero() {
            break;
        }
    }

    u << shift
}

/// Returns the least common multiple of `a` and `b` or `None` if it does not fit into `T`.
///
/// The smaller operand is divided by the GCD before multiplying, so this only fails when the
/// result itself is out of range.
#[inline]
pub fn checked_lcm<T: PrimInt + Unsigned>(a: T, b: T) -> Option<T> {
    if a.is_zero() || b.is_zero() {
        return Some(T::zero());
    }
    let (small, large) = if a < b { (a, b) } else { (b, a) };
    large.checked_mul(&(small / gcd(small, large)))
}

/// Returns the least common multiple of all `lengths`.
///
/// The empty sequence has an LCM of `1`. Returns [`Error::Overflow`] when a length or the
/// result does not fit into `T`.
pub fn reduce<T, I>(lengths: I) -> Result<T, Error>
where
    T: PrimInt + Unsigned,
    I: IntoIterator<Item = usize>,
{
    lengths.into_iter().try_fold(T::one(), |lcm, length| {
        let length = <T as NumCast>::from(length).ok_or_else(Error::overflow::<T>)?;
        checked_lcm(lcm, length).ok_or_else(Error::overflow::<T>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::proptest;

    fn euclid(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }

    #[test]
    fn gcd_base_cases() {
        assert_eq!(gcd(0u32, 0), 0);
        assert_eq!(gcd(0u32, 12), 12);
        assert_eq!(gcd(12u32, 0), 12);
        assert_eq!(gcd(1u32, 1), 1);
    }

    #[test]
    fn gcd_values() {
        assert_eq!(gcd(12u32, 18), 6);
        assert_eq!(gcd(48u64, 180), 12);
        assert_eq!(gcd(17u16, 5), 1);
        assert_eq!(gcd(1u64 << 40, 1 << 20), 1 << 20);
        assert_eq!(gcd(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn lcm_ranges() {
        assert_eq!(checked_lcm(4u32, 6), Some(12));
        assert_eq!(checked_lcm(7u32, 1), Some(7));
        assert_eq!(checked_lcm(1u8 << 7, 3), None);
        assert_eq!(checked_lcm(1u8 << 7, 2), Some(1 << 7));
    }

    #[test]
    fn reduce_sequences() {
        assert_eq!(reduce::<u64, _>(None), Ok(1));
        assert_eq!(reduce::<u64, _>([42]), Ok(42));
        assert_eq!(reduce::<u64, _>([2, 3, 4, 5, 1]), Ok(60));
        assert_eq!(reduce::<u32, _>([6, 10, 15]), Ok(30));
    }

    #[test]
    fn reduce_overflow() {
        assert_eq!(
            reduce::<u16, _>([256, 257]),
            Err(Error::Overflow { bits: 16 })
        );
        assert_eq!(
            reduce::<u16, _>([1 << 16]),
            Err(Error::Overflow { bits: 16 })
        );
        assert_eq!(reduce::<u16, _>([256, 257, 1]).ok(), None);
        assert_eq!(reduce::<u16, _>([256, 255]), Ok(65280));
        assert_eq!(reduce::<u16, _>([256, 128]), Ok(256));
    }

    proptest! {
        #[test]
        fn gcd_matches_euclid(a: u64, b: u64) {
            let g = gcd(a, b);
            assert_eq!(g, euclid(a, b));
            assert_eq!(g, gcd(b, a));
        }

        #[test]
        fn gcd_with_zero(a: u64) {
            assert_eq!(gcd(a, 0), a);
            assert_eq!(gcd(0, a), a);
        }

        #[test]
        fn reduce_single(x in 1usize..) {
            assert_eq!(reduce::<u64, _>([x]), Ok(x as u64));
        }

        #[test]
        fn lcm_is_common_multiple(a in 1u32..100_000, b in 1u32..100_000) {
            let lcm = checked_lcm(a as u64, b as u64).unwrap();
            assert_eq!(lcm % a as u64, 0);
            assert_eq!(lcm % b as u64, 0);
            assert_eq!(lcm * gcd(a as u64, b as u64), a as u64 * b as u64);
        }
    }
}
