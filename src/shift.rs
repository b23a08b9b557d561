//! Width-safe scaling by powers of two.
//!
//! Every rescale in the crate goes through [`shift_left`] / [`shift_right`].
//! The shift happens at a width covering both the input and output types
//! (128 bits when both fit, 256 otherwise) and the result is truncated to the
//! output type afterwards, so narrowing never discards bits a right shift
//! would have kept. Right shifts round toward negative infinity.

use crate::integers::{I256, U256};
use crate::width::Integer;
use core::cmp::Ordering;

/// Two's complement conversion between integer widths, as `as` does for built-ins.
#[inline]
pub fn cast<Out: Integer, In: Integer>(value: In) -> Out {
    if In::BITS <= 128 && Out::BITS <= 128 {
        Out::from_u128_bits(value.to_u128_bits())
    } else {
        Out::from_i256(value.to_i256())
    }
}

/// `value × 2^exponent`, computed without intermediate overflow and
/// truncated to `Out`.
///
/// A negative exponent shifts right, rounding toward negative infinity.
#[inline]
pub fn shift_left<Out: Integer, In: Integer>(value: In, exponent: i32) -> Out {
    match exponent.cmp(&0) {
        Ordering::Equal => cast(value),
        Ordering::Greater => scale_up(value, exponent.unsigned_abs()),
        Ordering::Less => scale_down(value, exponent.unsigned_abs()),
    }
}

/// `floor(value / 2^exponent)` as `Out`; a negative exponent shifts left.
#[inline]
pub fn shift_right<Out: Integer, In: Integer>(value: In, exponent: i32) -> Out {
    match exponent.cmp(&0) {
        Ordering::Equal => cast(value),
        Ordering::Greater => scale_down(value, exponent.unsigned_abs()),
        Ordering::Less => scale_up(value, exponent.unsigned_abs()),
    }
}

fn scale_up<Out: Integer, In: Integer>(value: In, amount: u32) -> Out {
    if In::BITS <= 128 && Out::BITS <= 128 {
        let bits = value.to_u128_bits();
        let shifted = if amount >= 128 { 0 } else { bits << amount };
        Out::from_u128_bits(shifted)
    } else {
        let bits = value.to_i256().to_unsigned();
        let shifted = if amount >= 256 { U256::zero() } else { bits << amount as usize };
        Out::from_i256(I256::from_unsigned(shifted))
    }
}

fn scale_down<Out: Integer, In: Integer>(value: In, amount: u32) -> Out {
    let negative = value < In::ZERO;

    if In::BITS <= 128 && Out::BITS <= 128 {
        let bits = value.to_u128_bits();
        let shifted = match (negative, amount >= 128) {
            (false, false) => bits >> amount,
            (false, true) => 0,
            (true, false) => ((bits as i128) >> amount) as u128,
            (true, true) => u128::MAX,
        };
        Out::from_u128_bits(shifted)
    } else {
        let bits = value.to_i256();
        let shifted = if negative {
            bits.arithmetic_shr(amount as usize)
        } else if amount >= 256 {
            I256::zero()
        } else {
            I256::from_unsigned(bits.to_unsigned() >> amount as usize)
        };
        Out::from_i256(shifted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exponent_is_a_cast() {
        assert_eq!(shift_left::<i8, i32>(300, 0), 44);
        assert_eq!(shift_right::<u8, i8>(-1, 0), 255);
        assert_eq!(shift_left::<i64, i8>(-5, 0), -5);
    }

    #[test]
    fn left_shift_widens_before_shifting() {
        assert_eq!(shift_left::<i32, i8>(100, 8), 25_600);
        assert_eq!(shift_left::<i32, i8>(-100, 8), -25_600);
        assert_eq!(shift_left::<u64, u8>(255, 40), 255 << 40);
    }

    #[test]
    fn right_shift_narrows_after_shifting() {
        assert_eq!(shift_right::<i8, i32>(25_600, 8), 100);
        assert_eq!(shift_right::<u8, u64>(255 << 40, 40), 255);
    }

    #[test]
    fn right_shift_floors_negative_values() {
        assert_eq!(shift_right::<i32, i32>(-7, 1), -4);
        assert_eq!(shift_right::<i32, i32>(-8, 1), -4);
        assert_eq!(shift_right::<i32, i32>(7, 1), 3);
        assert_eq!(shift_right::<i8, i8>(-1, 3), -1);
    }

    #[test]
    fn negative_exponent_reverses_direction() {
        assert_eq!(shift_left::<i32, i32>(-7, -1), -4);
        assert_eq!(shift_right::<i32, i32>(3, -4), 48);
        assert_eq!(shift_left::<i32, i32>(1, i32::MIN), 0);
        assert_eq!(shift_right::<i32, i32>(-1, i32::MAX), -1);
    }

    #[test]
    fn shifts_past_the_width() {
        assert_eq!(shift_left::<u128, u128>(1, 127), 1 << 127);
        assert_eq!(shift_left::<u128, u128>(1, 128), 0);
        assert_eq!(shift_right::<i128, i128>(i128::MIN, 127), -1);
        assert_eq!(shift_right::<i128, i128>(i128::MIN, 200), -1);
        assert_eq!(shift_right::<u128, u128>(u128::MAX, 128), 0);
    }

    #[test]
    fn unsigned_high_bit_is_not_a_sign() {
        assert_eq!(shift_right::<u128, u128>(u128::MAX, 127), 1);
        assert_eq!(shift_right::<i16, u8>(0x80, 4), 8);
    }

    #[test]
    fn wide_tier() {
        let product: I256 = shift_left::<I256, i128>(i128::MIN, 100);
        assert!(product.is_negative());
        assert_eq!(shift_right::<i128, I256>(product, 100), i128::MIN);

        let big: U256 = shift_left::<U256, u128>(u128::MAX, 128);
        assert_eq!(shift_right::<u128, U256>(big, 128), u128::MAX);
        assert_eq!(shift_right::<i64, I256>(I256::from(-9i128), 2), -3);
        assert_eq!(shift_right::<i64, I256>(I256::from(-9i128), 400), -1);
        assert_eq!(shift_left::<i64, I256>(I256::from(3i128), 300), 0);
    }
}
