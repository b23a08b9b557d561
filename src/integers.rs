//! 256-bit integers: the double-width tier for 128-bit representations.

use crate::construct_sint;
use crate::width::Integer;
use uint::construct_uint;

// these have scuffed doc comments because the macro codegens the beginning of them
construct_uint! {
    /// with 256-bits of precision, consisting of four 64-bit words.
    pub struct U256(4);
}

impl U256 {
    #[inline]
    pub fn wrapping_mul(&self, other: U256) -> U256 {
        let (result, _) = self.overflowing_mul(other);

        result
    }
}

construct_sint! {
    pub struct I256(U256);
}

#[inline]
fn low_u128(value: U256) -> u128 {
    let U256(ref words) = value;
    words[0] as u128 | (words[1] as u128) << 64
}

impl Integer for U256 {
    const BITS: u32 = 256;
    const SIGNED: bool = false;
    const ZERO: Self = U256([0; 4]);
    const MIN: Self = U256([0; 4]);
    const MAX: Self = U256([u64::MAX; 4]);

    #[inline]
    fn to_u128_bits(self) -> u128 {
        low_u128(self)
    }

    #[inline]
    fn from_u128_bits(bits: u128) -> Self {
        U256([bits as u64, (bits >> 64) as u64, 0, 0])
    }

    #[inline]
    fn to_i256(self) -> I256 {
        I256::from_unsigned(self)
    }

    #[inline]
    fn from_i256(value: I256) -> Self {
        value.to_unsigned()
    }
}

impl Integer for I256 {
    const BITS: u32 = 256;
    const SIGNED: bool = true;
    const ZERO: Self = I256::zero();
    const MIN: Self = I256::MIN;
    const MAX: Self = I256::MAX;

    #[inline]
    fn to_u128_bits(self) -> u128 {
        low_u128(self.to_unsigned())
    }

    #[inline]
    fn from_u128_bits(bits: u128) -> Self {
        I256::from(bits as i128)
    }

    #[inline]
    fn to_i256(self) -> I256 {
        self
    }

    #[inline]
    fn from_i256(value: I256) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_constants() {
        assert!(I256::MIN.is_negative());
        assert!(!I256::MAX.is_negative());
        assert!(I256::minus_one().is_negative());
        assert!(I256::zero().is_zero());
        assert_eq!(I256::MIN.wrapping_sub(I256::one()), I256::MAX);
        assert_eq!(I256::MAX.wrapping_add(I256::one()), I256::MIN);
    }

    #[test]
    fn ordering_handles_both_signs() {
        let a = I256::from(-5i128);
        let b = I256::from(-3i128);
        let c = I256::from(7i128);
        assert!(a < b);
        assert!(b < c);
        assert!(I256::MIN < a);
        assert!(c < I256::MAX);
        assert_eq!(a.cmp(&a), core::cmp::Ordering::Equal);
    }

    #[test]
    fn from_i128_sign_extends() {
        assert_eq!(I256::from(-1i128), I256::minus_one());
        assert_eq!(I256::from(i128::MIN).to_u128_bits(), i128::MIN as u128);
        assert!(I256::from(i128::MIN).is_negative());
        assert_eq!(I256::from(i128::MAX).to_u128_bits(), i128::MAX as u128);
        assert!(!I256::from(i128::MAX).is_negative());
    }

    #[test]
    fn signed_multiply_and_divide() {
        let a = I256::from(-12i128);
        let b = I256::from(5i128);
        assert_eq!(a.wrapping_mul(b), I256::from(-60i128));
        assert_eq!(a.wrapping_div(b), I256::from(-2i128));
        assert_eq!(b.wrapping_div(a), I256::zero());
        assert_eq!(I256::MIN.wrapping_div(I256::minus_one()), I256::MIN);

        let big = I256::from(i128::MAX).wrapping_mul(I256::from(4i128));
        assert_eq!(big.wrapping_div(I256::from(4i128)), I256::from(i128::MAX));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn divide_by_zero_panics() {
        I256::one().wrapping_div(I256::zero());
    }

    #[test]
    fn arithmetic_shift_floors() {
        assert_eq!(I256::from(-7i128).arithmetic_shr(1), I256::from(-4i128));
        assert_eq!(I256::from(7i128).arithmetic_shr(1), I256::from(3i128));
        assert_eq!(I256::from(-1i128).arithmetic_shr(300), I256::minus_one());
        assert_eq!(I256::from(1i128).arithmetic_shr(256), I256::zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", I256::from(-42i128)), "-42");
        assert_eq!(format!("{:?}", I256::from(42i128)), "42");
    }
}
