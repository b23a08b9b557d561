// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::arith::{divide, multiply};
use crate::error::{self, ParseFixedError};
use crate::integers::{I256, U256};
use crate::resolve::{self, Format, Kind, Numeric};
use crate::shift::shift_right;
use crate::width::{CommonFloat, CommonRepr, CommonReprWith, Float, Integer, Repr};
use core::cmp::Ordering;
use core::fmt::{self, Write};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

/// Binary fixed-point number: the integer `repr` scaled by `2^E`.
///
/// ## Fields
///
/// * `0` - The representation; the stored value is `0 × 2^E`
///
/// ## Notes
///
/// * `E < 0` gives `-E` fractional bits, `E > 0` makes every step `2^E` wide
/// * Right shifts round toward negative infinity, division and float
///   conversion truncate toward zero
/// * Overflow behaves like the representation's own operators: a panic in
///   debug builds, wrapping in release builds
#[repr(transparent)]
#[derive(Copy, Clone, Default, Hash, Debug)]
pub struct FixedPoint<R, const E: i32>(pub R);

/// Operations shared by every `FixedPoint` specialization, for use in
/// generic code where `R` and `E` are not spelled out.
pub trait Scaled: Numeric + Add<Output = Self> + Sub<Output = Self> {
    type Repr: Repr;
    const EXPONENT: i32;
    const FORMAT: Format;

    fn from_data(repr: Self::Repr) -> Self;
    fn data(self) -> Self::Repr;

    /// Converts between exponents, flooring any dropped low bits.
    #[inline]
    fn from_fixed<S: Scaled>(other: S) -> Self {
        Self::from_data(shift_right::<Self::Repr, S::Repr>(
            other.data(),
            Self::EXPONENT - S::EXPONENT,
        ))
    }
}

impl<R: Repr, const E: i32> Scaled for FixedPoint<R, E> {
    type Repr = R;
    const EXPONENT: i32 = E;
    const FORMAT: Format = Format::new(R::FORMAT, E);

    #[inline]
    fn from_data(repr: R) -> Self {
        Self(repr)
    }

    #[inline]
    fn data(self) -> R {
        self.0
    }
}

impl<R: Repr, const E: i32> Numeric for FixedPoint<R, E> {
    const KIND: Kind = Kind::Fixed(Format::new(R::FORMAT, E));
}

impl<R: Repr, const E: i32> FixedPoint<R, E> {
    pub const EXPONENT: i32 = E;
    pub const FORMAT: Format = Format::new(R::FORMAT, E);
    /// Value bits of the representation, excluding the sign bit.
    pub const DIGITS: i32 = Self::FORMAT.digits();
    pub const INTEGER_DIGITS: i32 = Self::FORMAT.integer_digits();
    pub const FRACTIONAL_DIGITS: i32 = Self::FORMAT.fractional_digits();

    pub const MIN: Self = Self(R::MIN);
    pub const MAX: Self = Self(R::MAX);
    pub const ZERO: Self = Self(R::ZERO);

    #[inline]
    pub const fn from_data(repr: R) -> Self {
        Self(repr)
    }

    #[inline]
    pub const fn data(&self) -> R {
        self.0
    }

    /// `value × 2^-E`, flooring bits below the resolution.
    #[inline]
    pub fn from_int<S: Integer>(value: S) -> Self {
        Self(shift_right::<R, S>(value, E))
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub fn to_int<S: Integer>(self) -> S {
        crate::shift::shift_left::<S, R>(self.0, E)
    }

    /// Truncates toward zero; out-of-range values saturate and NaN maps to zero.
    #[inline]
    pub fn from_float<F: Float>(value: F) -> Self {
        let inverse = E.saturating_neg();
        Self((value * F::pow2(inverse / 2) * F::pow2(inverse - inverse / 2)).to_repr())
    }

    #[inline]
    pub fn to_float<F: Float>(self) -> F {
        F::from_repr(self.0) * F::pow2(E / 2) * F::pow2(E - E / 2)
    }

    #[inline]
    pub fn from_fixed<S: Scaled>(other: S) -> Self {
        <Self as Scaled>::from_fixed(other)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == R::ZERO
    }
}

impl<R: Repr, const E: i32> From<FixedPoint<R, E>> for bool {
    #[inline]
    fn from(value: FixedPoint<R, E>) -> bool {
        !value.is_zero()
    }
}

// ---------- comparison ----------

/// Both operands in their common type's representation.
#[inline]
fn to_common<R1, const E1: i32, R2, const E2: i32>(
    lhs: FixedPoint<R1, E1>,
    rhs: FixedPoint<R2, E2>,
) -> (CommonRepr<R1, R2>, CommonRepr<R1, R2>)
where
    R1: Repr + CommonReprWith<R2>,
    R2: Repr,
{
    let exponent = const {
        let common = resolve::common_fixed(Format::new(R1::FORMAT, E1), Format::new(R2::FORMAT, E2));
        assert!(common.repr.same(<CommonRepr<R1, R2> as Integer>::FORMAT));
        common.exponent
    };

    (
        shift_right::<CommonRepr<R1, R2>, R1>(lhs.0, exponent - E1),
        shift_right::<CommonRepr<R1, R2>, R2>(rhs.0, exponent - E2),
    )
}

impl<R1, const E1: i32, R2, const E2: i32> PartialEq<FixedPoint<R2, E2>> for FixedPoint<R1, E1>
where
    R1: Repr + CommonReprWith<R2>,
    R2: Repr,
{
    #[inline]
    fn eq(&self, other: &FixedPoint<R2, E2>) -> bool {
        let (lhs, rhs) = to_common(*self, *other);
        lhs == rhs
    }
}

impl<R1, const E1: i32, R2, const E2: i32> PartialOrd<FixedPoint<R2, E2>> for FixedPoint<R1, E1>
where
    R1: Repr + CommonReprWith<R2>,
    R2: Repr,
{
    #[inline]
    fn partial_cmp(&self, other: &FixedPoint<R2, E2>) -> Option<Ordering> {
        let (lhs, rhs) = to_common(*self, *other);
        Some(lhs.cmp(&rhs))
    }
}

impl<R: Repr + CommonReprWith<R>, const E: i32> Eq for FixedPoint<R, E> {}

impl<R: Repr + CommonReprWith<R>, const E: i32> Ord for FixedPoint<R, E> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

// ---------- arithmetic ----------

impl<R: Repr, const E: i32> Add for FixedPoint<R, E> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<R: Repr, const E: i32> Sub for FixedPoint<R, E> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<R: Repr + Neg<Output = R>, const E: i32> Neg for FixedPoint<R, E> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<R: Repr, const E: i32> Mul for FixedPoint<R, E> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        multiply(self, rhs)
    }
}

impl<R: Repr, const E: i32> Div for FixedPoint<R, E> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        divide(self, rhs)
    }
}

impl<R: Repr, const E: i32> AddAssign for FixedPoint<R, E> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Repr, const E: i32> SubAssign for FixedPoint<R, E> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<R: Repr, const E: i32> MulAssign for FixedPoint<R, E> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<R: Repr, const E: i32> DivAssign for FixedPoint<R, E> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

/// Integer operands take the fixed-point operand's type; products and
/// quotients treat the integer as `FixedPoint<I, 0>`.
macro_rules! impl_integer_operands {
    ($($int:ty),*) => {$(
        impl<R: Repr, const E: i32> PartialEq<$int> for FixedPoint<R, E> {
            #[inline]
            fn eq(&self, other: &$int) -> bool {
                self.0 == Self::from_int(*other).0
            }
        }

        impl<R: Repr, const E: i32> PartialEq<FixedPoint<R, E>> for $int {
            #[inline]
            fn eq(&self, other: &FixedPoint<R, E>) -> bool {
                other == self
            }
        }

        impl<R: Repr, const E: i32> PartialOrd<$int> for FixedPoint<R, E> {
            #[inline]
            fn partial_cmp(&self, other: &$int) -> Option<Ordering> {
                Some(self.0.cmp(&Self::from_int(*other).0))
            }
        }

        impl<R: Repr, const E: i32> PartialOrd<FixedPoint<R, E>> for $int {
            #[inline]
            fn partial_cmp(&self, other: &FixedPoint<R, E>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }

        impl<R: Repr, const E: i32> Add<$int> for FixedPoint<R, E> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: $int) -> Self {
                self + Self::from_int(rhs)
            }
        }

        impl<R: Repr, const E: i32> Add<FixedPoint<R, E>> for $int {
            type Output = FixedPoint<R, E>;

            #[inline]
            fn add(self, rhs: FixedPoint<R, E>) -> FixedPoint<R, E> {
                FixedPoint::from_int(self) + rhs
            }
        }

        impl<R: Repr, const E: i32> Sub<$int> for FixedPoint<R, E> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: $int) -> Self {
                self - Self::from_int(rhs)
            }
        }

        impl<R: Repr, const E: i32> Sub<FixedPoint<R, E>> for $int {
            type Output = FixedPoint<R, E>;

            #[inline]
            fn sub(self, rhs: FixedPoint<R, E>) -> FixedPoint<R, E> {
                FixedPoint::from_int(self) - rhs
            }
        }

        impl<R: Repr, const E: i32> Mul<$int> for FixedPoint<R, E> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: $int) -> Self {
                multiply(self, FixedPoint::<$int, 0>::from_data(rhs))
            }
        }

        impl<R: Repr, const E: i32> Mul<FixedPoint<R, E>> for $int {
            type Output = FixedPoint<R, E>;

            #[inline]
            fn mul(self, rhs: FixedPoint<R, E>) -> FixedPoint<R, E> {
                multiply(FixedPoint::<$int, 0>::from_data(self), rhs)
            }
        }

        impl<R: Repr, const E: i32> Div<$int> for FixedPoint<R, E> {
            type Output = Self;

            #[inline]
            fn div(self, rhs: $int) -> Self {
                divide(self, FixedPoint::<$int, 0>::from_data(rhs))
            }
        }

        impl<R: Repr, const E: i32> Div<FixedPoint<R, E>> for $int {
            type Output = FixedPoint<R, E>;

            #[inline]
            fn div(self, rhs: FixedPoint<R, E>) -> FixedPoint<R, E> {
                divide(FixedPoint::<$int, 0>::from_data(self), rhs)
            }
        }

        impl<R: Repr, const E: i32> AddAssign<$int> for FixedPoint<R, E> {
            #[inline]
            fn add_assign(&mut self, rhs: $int) {
                *self = *self + rhs;
            }
        }

        impl<R: Repr, const E: i32> SubAssign<$int> for FixedPoint<R, E> {
            #[inline]
            fn sub_assign(&mut self, rhs: $int) {
                *self = *self - rhs;
            }
        }

        impl<R: Repr, const E: i32> MulAssign<$int> for FixedPoint<R, E> {
            #[inline]
            fn mul_assign(&mut self, rhs: $int) {
                *self = *self * rhs;
            }
        }

        impl<R: Repr, const E: i32> DivAssign<$int> for FixedPoint<R, E> {
            #[inline]
            fn div_assign(&mut self, rhs: $int) {
                *self = *self / rhs;
            }
        }
    )*};
}

impl_integer_operands!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128);

/// Float operands produce the common float of the operand and the
/// representation's own float.
macro_rules! impl_float_operands {
    ($($float:ty),*) => {$(
        impl<R: Repr, const E: i32> PartialEq<$float> for FixedPoint<R, E> {
            #[inline]
            fn eq(&self, other: &$float) -> bool {
                self.to_float::<CommonFloat<R::Float, $float>>()
                    == <CommonFloat<R::Float, $float> as Float>::from_f64(*other as f64)
            }
        }

        impl<R: Repr, const E: i32> PartialEq<FixedPoint<R, E>> for $float {
            #[inline]
            fn eq(&self, other: &FixedPoint<R, E>) -> bool {
                other == self
            }
        }

        impl<R: Repr, const E: i32> PartialOrd<$float> for FixedPoint<R, E> {
            #[inline]
            fn partial_cmp(&self, other: &$float) -> Option<Ordering> {
                self.to_float::<CommonFloat<R::Float, $float>>()
                    .partial_cmp(&<CommonFloat<R::Float, $float> as Float>::from_f64(*other as f64))
            }
        }

        impl<R: Repr, const E: i32> PartialOrd<FixedPoint<R, E>> for $float {
            #[inline]
            fn partial_cmp(&self, other: &FixedPoint<R, E>) -> Option<Ordering> {
                other.partial_cmp(self).map(Ordering::reverse)
            }
        }

        impl<R: Repr, const E: i32> Add<$float> for FixedPoint<R, E> {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn add(self, rhs: $float) -> Self::Output {
                self.to_float::<Self::Output>() + <Self::Output as Float>::from_f64(rhs as f64)
            }
        }

        impl<R: Repr, const E: i32> Add<FixedPoint<R, E>> for $float {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn add(self, rhs: FixedPoint<R, E>) -> Self::Output {
                <Self::Output as Float>::from_f64(self as f64) + rhs.to_float::<Self::Output>()
            }
        }

        impl<R: Repr, const E: i32> Sub<$float> for FixedPoint<R, E> {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn sub(self, rhs: $float) -> Self::Output {
                self.to_float::<Self::Output>() - <Self::Output as Float>::from_f64(rhs as f64)
            }
        }

        impl<R: Repr, const E: i32> Sub<FixedPoint<R, E>> for $float {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn sub(self, rhs: FixedPoint<R, E>) -> Self::Output {
                <Self::Output as Float>::from_f64(self as f64) - rhs.to_float::<Self::Output>()
            }
        }

        impl<R: Repr, const E: i32> Mul<$float> for FixedPoint<R, E> {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn mul(self, rhs: $float) -> Self::Output {
                self.to_float::<Self::Output>() * <Self::Output as Float>::from_f64(rhs as f64)
            }
        }

        impl<R: Repr, const E: i32> Mul<FixedPoint<R, E>> for $float {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn mul(self, rhs: FixedPoint<R, E>) -> Self::Output {
                <Self::Output as Float>::from_f64(self as f64) * rhs.to_float::<Self::Output>()
            }
        }

        impl<R: Repr, const E: i32> Div<$float> for FixedPoint<R, E> {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn div(self, rhs: $float) -> Self::Output {
                self.to_float::<Self::Output>() / <Self::Output as Float>::from_f64(rhs as f64)
            }
        }

        impl<R: Repr, const E: i32> Div<FixedPoint<R, E>> for $float {
            type Output = CommonFloat<R::Float, $float>;

            #[inline]
            fn div(self, rhs: FixedPoint<R, E>) -> Self::Output {
                <Self::Output as Float>::from_f64(self as f64) / rhs.to_float::<Self::Output>()
            }
        }

        impl<R: Repr, const E: i32> AddAssign<$float> for FixedPoint<R, E> {
            #[inline]
            fn add_assign(&mut self, rhs: $float) {
                *self = *self + Self::from_float(rhs);
            }
        }

        impl<R: Repr, const E: i32> SubAssign<$float> for FixedPoint<R, E> {
            #[inline]
            fn sub_assign(&mut self, rhs: $float) {
                *self = *self - Self::from_float(rhs);
            }
        }

        // scales the representation directly
        impl<R: Repr, const E: i32> MulAssign<$float> for FixedPoint<R, E> {
            #[inline]
            fn mul_assign(&mut self, rhs: $float) {
                self.0 = (<$float as Float>::from_repr(self.0) * rhs).to_repr();
            }
        }

        impl<R: Repr, const E: i32> DivAssign<$float> for FixedPoint<R, E> {
            #[inline]
            fn div_assign(&mut self, rhs: $float) {
                self.0 = (<$float as Float>::from_repr(self.0) / rhs).to_repr();
            }
        }
    )*};
}

impl_float_operands!(f32, f64);

// ---------- formatting ----------

/// Counts the bytes a rendering would take, for padding.
struct Measure(usize);

impl Write for Measure {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.len();
        Ok(())
    }
}

impl<R: Repr, const E: i32> FixedPoint<R, E> {
    /// Writes `|self|` in decimal, truncated to `precision` fractional digits.
    fn write_magnitude<W: Write>(&self, out: &mut W, precision: Option<usize>) -> fmt::Result {
        if E > 127 {
            let value = self.to_float::<f64>();
            return write!(out, "{:e}", if value < 0.0 { -value } else { value });
        }

        let magnitude = self.0.to_i256().unsigned_abs();

        if E >= 0 {
            write!(out, "{}", magnitude << E as usize)?;
            if let Some(precision) = precision.filter(|&p| p > 0) {
                out.write_char('.')?;
                for _ in 0..precision {
                    out.write_char('0')?;
                }
            }
            return Ok(());
        }

        let shift = E.unsigned_abs() as usize;
        let (integer, mut fraction, bits) = if shift > 128 {
            let drop = shift - 128;
            let fraction = if drop >= 256 { U256::zero() } else { magnitude >> drop };
            (U256::zero(), fraction, 128)
        } else {
            let mask = (U256::one() << shift) - U256::one();
            (magnitude >> shift, magnitude & mask, shift)
        };
        let mask = (U256::one() << bits) - U256::one();
        let ten = U256::from(10u64);

        write!(out, "{}", integer)?;

        let digits = match precision {
            Some(0) => return Ok(()),
            Some(precision) => precision,
            None if fraction.is_zero() => return Ok(()),
            None => usize::MAX,
        };

        out.write_char('.')?;
        let mut written = 0;
        while written < digits && (digits != usize::MAX || !fraction.is_zero()) {
            fraction = fraction * ten;
            let digit = (fraction >> bits).low_u64() as u8;
            fraction = fraction & mask;
            out.write_char(char::from(b'0' + digit))?;
            written += 1;
        }
        Ok(())
    }
}

/// Prints the exact binary value in decimal.
///
/// A precision (`{:.3}`) truncates the fraction to that many digits.
/// Fractions finer than 2^-128 are cut to 128 bits first, and exponents above
/// 127 print through `f64` in scientific notation. Width, fill, alignment,
/// `+` and `0` behave as for the built-in numbers.
impl<R: Repr, const E: i32> fmt::Display for FixedPoint<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let sign = if self.0 < R::ZERO {
            "-"
        } else if f.sign_plus() {
            "+"
        } else {
            ""
        };

        let Some(width) = f.width() else {
            f.write_str(sign)?;
            return self.write_magnitude(f, precision);
        };

        let mut measure = Measure(sign.len());
        self.write_magnitude(&mut measure, precision)?;
        let padding = width.saturating_sub(measure.0);

        if f.sign_aware_zero_pad() {
            f.write_str(sign)?;
            for _ in 0..padding {
                f.write_char('0')?;
            }
            return self.write_magnitude(f, precision);
        }

        let (before, after) = match f.align() {
            Some(fmt::Alignment::Left) => (0, padding),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Right) | None => (padding, 0),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(sign)?;
        self.write_magnitude(f, precision)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

// fractional digits kept when parsing; twice 10^76 still fits in 256 bits
const MAX_FRACTION_DIGITS: u32 = 76;

/// `floor(remainder / denominator × 2^bits)` by binary long division.
fn fraction_bits(mut remainder: U256, denominator: U256, bits: usize) -> error::Result<U256> {
    let mut result = U256::zero();
    if remainder.is_zero() {
        return Ok(result);
    }

    for _ in 0..bits {
        if result.bit(255) {
            return Err(ParseFixedError::OutOfRange);
        }
        remainder = remainder << 1;
        result = result << 1;
        if remainder >= denominator {
            remainder = remainder - denominator;
            result = result | U256::one();
        }
    }
    Ok(result)
}

/// Parses `[+-]digits[.digits]`, truncating toward zero to the nearest
/// representable value.
impl<R: Repr, const E: i32> FromStr for FixedPoint<R, E> {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> error::Result<Self> {
        let bytes = s.as_bytes();
        let (negative, start) = match bytes.first() {
            Some(b'-') => (true, 1),
            Some(b'+') => (false, 1),
            _ => (false, 0),
        };

        let ten = U256::from(10u64);
        let mut integer = U256::zero();
        let mut numerator = U256::zero();
        let mut denominator = U256::one();
        let mut fraction_digits = 0u32;
        let mut in_fraction = false;
        let mut seen_digit = false;

        for (position, &byte) in bytes.iter().enumerate().skip(start) {
            match byte {
                b'.' if !in_fraction => in_fraction = true,
                b'0'..=b'9' => {
                    seen_digit = true;
                    let digit = U256::from(byte - b'0');
                    if !in_fraction {
                        integer = integer
                            .checked_mul(ten)
                            .and_then(|v| v.checked_add(digit))
                            .ok_or(ParseFixedError::OutOfRange)?;
                    } else if fraction_digits < MAX_FRACTION_DIGITS {
                        numerator = numerator * ten + digit;
                        denominator = denominator * ten;
                        fraction_digits += 1;
                    }
                }
                _ => return Err(ParseFixedError::InvalidDigit { position }),
            }
        }

        if !seen_digit {
            return Err(ParseFixedError::Empty);
        }

        let raw = if E > 0 {
            if E >= 256 {
                U256::zero()
            } else {
                integer >> E as usize
            }
        } else {
            let shift = E.unsigned_abs() as usize;
            let whole = if integer.is_zero() {
                U256::zero()
            } else if integer.bits() + shift > 256 {
                return Err(ParseFixedError::OutOfRange);
            } else {
                integer << shift
            };
            whole
                .checked_add(fraction_bits(numerator, denominator, shift)?)
                .ok_or(ParseFixedError::OutOfRange)?
        };

        let limit = if negative {
            R::MIN.to_i256().unsigned_abs()
        } else {
            R::MAX.to_i256().to_unsigned()
        };
        if raw > limit {
            return Err(ParseFixedError::OutOfRange);
        }

        let value = I256::from_unsigned(raw);
        let value = if negative { value.wrapping_neg() } else { value };
        Ok(Self(R::from_i256(value)))
    }
}

// ---------- optional integrations ----------

#[cfg(feature = "bytemuck")]
unsafe impl<R: Repr + bytemuck::Zeroable, const E: i32> bytemuck::Zeroable for FixedPoint<R, E> {}
#[cfg(feature = "bytemuck")]
unsafe impl<R: Repr + bytemuck::Pod, const E: i32> bytemuck::Pod for FixedPoint<R, E> {}

#[cfg(feature = "serde")]
impl<R: Repr + serde::Serialize, const E: i32> serde::Serialize for FixedPoint<R, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: serde::Serializer
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: Repr + serde::Deserialize<'de>, const E: i32> serde::Deserialize<'de> for FixedPoint<R, E> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: serde::Deserializer<'de>
    {
        R::deserialize(deserializer).map(Self)
    }
}

// ---------- named types ----------

/// Signed Q3.4: 3 integer bits, 4 fractional bits in an `i8`.
/// Range: [-8, 8), resolution 2^-4 = 0.0625
pub type SQ3x4 = FixedPoint<i8, -4>;

/// Signed Q7.8 in an `i16`.
/// Range: [-128, 128), resolution 2^-8 ≈ 3.906 * 10^-3
pub type SQ7x8 = FixedPoint<i16, -8>;

/// Signed Q15.16 in an `i32`.
/// Range: [-32768, 32768), resolution 2^-16 ≈ 1.526 * 10^-5
pub type SQ15x16 = FixedPoint<i32, -16>;

/// Signed Q31.32 in an `i64`.
/// Range: [-2^31, 2^31), resolution 2^-32 ≈ 2.328 * 10^-10
pub type SQ31x32 = FixedPoint<i64, -32>;

/// Signed Q63.64 in an `i128`, widened to `I256` for multiplication and division.
/// Range: [-2^63, 2^63), resolution 2^-64 ≈ 5.421 * 10^-20
pub type SQ63x64 = FixedPoint<i128, -64>;

/// Unsigned Q8.8 in a `u16`.
pub type Q8x8 = FixedPoint<u16, -8>;

/// Unsigned Q16.16 in a `u32`.
pub type Q16x16 = FixedPoint<u32, -16>;

/// Unsigned Q32.32 in a `u64`.
pub type Q32x32 = FixedPoint<u64, -32>;

/// Unsigned Q64.64 in a `u128`, widened to `U256` for multiplication and division.
/// Range: [0, 2^64), resolution 2^-64 ≈ 5.421 * 10^-20
pub type Q64x64 = FixedPoint<u128, -64>;
