//! Multiplication, division, summation and square root with caller-chosen
//! result types.

use crate::fixed_point::{FixedPoint, Scaled};
use crate::integers::{I256, U256};
use crate::resolve::{self, Format};
use crate::shift::{cast, shift_left, shift_right};
use crate::width::{Integer, Repr};

/// Multiplies into `Out`.
///
/// The full product is formed at double the common width (`i128`/`u128` up
/// to 64-bit representations, `I256`/`U256` above) and only then rescaled
/// into `Out`, so a product whose value fits `Out` never wraps.
#[inline]
pub fn multiply<Out: Scaled, L: Scaled, Rt: Scaled>(lhs: L, rhs: Rt) -> Out {
    let shift = L::EXPONENT + Rt::EXPONENT - Out::EXPONENT;
    let wide = <L::Repr as Integer>::BITS > 64 || <Rt::Repr as Integer>::BITS > 64;
    let signed = <L::Repr as Integer>::SIGNED || <Rt::Repr as Integer>::SIGNED;

    let data = match (wide, signed) {
        (false, false) => {
            let product = cast::<u128, L::Repr>(lhs.data()) * cast::<u128, Rt::Repr>(rhs.data());
            shift_left::<Out::Repr, u128>(product, shift)
        }
        (false, true) => {
            let product = cast::<i128, L::Repr>(lhs.data()) * cast::<i128, Rt::Repr>(rhs.data());
            shift_left::<Out::Repr, i128>(product, shift)
        }
        (true, false) => {
            let product = cast::<U256, L::Repr>(lhs.data()).wrapping_mul(cast(rhs.data()));
            shift_left::<Out::Repr, U256>(product, shift)
        }
        (true, true) => {
            let product = cast::<I256, L::Repr>(lhs.data()).wrapping_mul(cast(rhs.data()));
            shift_left::<Out::Repr, I256>(product, shift)
        }
    };

    Out::from_data(data)
}

/// Divides into `Out`.
///
/// The dividend is widened so the integer division (truncating toward zero)
/// keeps the digits of `Out`; the final rescale into `Out` floors.
///
/// ## Panics
///
/// * If `rhs` is zero
#[inline]
pub fn divide<Out: Scaled, L: Scaled, Rt: Scaled>(lhs: L, rhs: Rt) -> Out {
    let intermediate = const { resolve::divide_intermediate(Out::FORMAT, L::FORMAT, Rt::FORMAT) };
    divide_aligned::<Out, L::Repr, Rt>(lhs.data(), L::EXPONENT, intermediate, rhs)
}

/// Division with the dividend given as a raw integer at `dividend_exponent`,
/// widened to `intermediate` before the integer division.
pub(crate) fn divide_aligned<Out: Scaled, D: Integer, Rt: Scaled>(
    dividend: D,
    dividend_exponent: i32,
    intermediate: Format,
    divisor: Rt,
) -> Out {
    let align = intermediate.exponent - dividend_exponent;
    let rescale = intermediate.exponent - Rt::EXPONENT - Out::EXPONENT;
    let divisor = divisor.data();

    let data = if intermediate.repr.bits <= 64 && <Rt::Repr as Integer>::BITS <= 64 {
        let n = shift_right::<i128, D>(dividend, align);
        shift_left::<Out::Repr, i128>(n / cast::<i128, Rt::Repr>(divisor), rescale)
    } else if !D::SIGNED {
        // an unsigned intermediate may use all 256 bits, so divide magnitudes
        let n = shift_right::<U256, D>(dividend, align);
        let d = cast::<I256, Rt::Repr>(divisor);
        let magnitude = n / d.unsigned_abs();
        if d.is_negative() {
            shift_left::<Out::Repr, I256>(I256::from_unsigned(magnitude).wrapping_neg(), rescale)
        } else {
            shift_left::<Out::Repr, U256>(magnitude, rescale)
        }
    } else {
        let n = shift_right::<I256, D>(dividend, align);
        shift_left::<Out::Repr, I256>(n.wrapping_div(cast(divisor)), rescale)
    };

    Out::from_data(data)
}

/// Sums same-typed addends into `Out`, converting each before adding.
///
/// Folds from the last addend; an empty slice gives zero.
pub fn add<Out: Scaled, F: Scaled>(addends: &[F]) -> Out {
    addends
        .iter()
        .rev()
        .fold(Out::from_data(<Out::Repr as Integer>::ZERO), |sum, &addend| {
            Out::from_fixed(addend) + sum
        })
}

macro_rules! impl_integer_sqrt {
    ($name:ident, $t:ty, $zero:expr, $top_bit:expr) => {
        fn $name(value: $t) -> $t {
            // highest power of four not above the value
            let mut bit: $t = $top_bit;
            while bit > value {
                bit = bit >> 2;
            }

            let mut remainder = value;
            let mut result: $t = $zero;
            while bit != $zero {
                if remainder >= result + bit {
                    remainder = remainder - (result + bit);
                    result = (result >> 1) + bit;
                } else {
                    result = result >> 1;
                }
                bit = bit >> 2;
            }
            result
        }
    };
}

impl_integer_sqrt!(sqrt_u128, u128, 0, 1 << 126);
impl_integer_sqrt!(sqrt_u256, U256, U256::zero(), U256::one() << 254);

/// Square root, truncated to the resolution of `x`.
///
/// The operand is rescaled into `R::Wide` so the integer root lands on the
/// same exponent. Negative input is outside the domain.
pub fn sqrt<R: Repr, const E: i32>(x: FixedPoint<R, E>) -> FixedPoint<R, E> {
    debug_assert!(x.0 >= R::ZERO, "square root of a negative value");

    let wide = shift_right::<R::Wide, R>(x.0, E);
    let root = if <R::Wide as Integer>::BITS <= 128 {
        cast::<R, u128>(sqrt_u128(wide.to_u128_bits()))
    } else {
        cast::<R, U256>(sqrt_u256(cast::<U256, R::Wide>(wide)))
    };

    FixedPoint(root)
}

/// `a + b` in their common type.
pub fn common_add<Out: Scaled, A: Scaled, B: Scaled>(a: A, b: B) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::common_fixed(A::FORMAT, B::FORMAT)),
            "output type must be the common type of the operands"
        )
    };
    Out::from_fixed(a) + Out::from_fixed(b)
}

/// `a - b` in their common type.
pub fn common_sub<Out: Scaled, A: Scaled, B: Scaled>(a: A, b: B) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::common_fixed(A::FORMAT, B::FORMAT)),
            "output type must be the common type of the operands"
        )
    };
    Out::from_fixed(a) - Out::from_fixed(b)
}

/// `a × b` in their common type.
pub fn common_mul<Out: Scaled, A: Scaled, B: Scaled>(a: A, b: B) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::common_fixed(A::FORMAT, B::FORMAT)),
            "output type must be the common type of the operands"
        )
    };
    multiply(a, b)
}

/// `a / b` in their common type.
pub fn common_div<Out: Scaled, A: Scaled, B: Scaled>(a: A, b: B) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::common_fixed(A::FORMAT, B::FORMAT)),
            "output type must be the common type of the operands"
        )
    };
    divide(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common_type, promote_multiply_result, Q64x64, Q8x8, SQ15x16, SQ31x32, SQ3x4, SQ63x64, SQ7x8};

    type Whole8 = FixedPoint<i8, 0>;

    // ---------- multiply ----------

    #[test]
    fn product_is_widened_before_rescaling() {
        let ten = Whole8::from_int(10);
        let twelve = Whole8::from_int(12);

        let hundred: promote_multiply_result!(Whole8) = multiply(ten, ten);
        let gross: promote_multiply_result!(Whole8) = multiply(twelve, twelve);
        assert_eq!(hundred.data(), 100i16);
        assert_eq!(gross.data(), 144i16);
    }

    #[test]
    fn product_rescales_into_result_exponent() {
        let a = SQ3x4::from_float(3.5);
        let b = SQ3x4::from_float(-2.25);

        let exact: FixedPoint<i16, -8> = multiply(a, b);
        assert_eq!(exact.to_float::<f64>(), -7.875);

        // floor at the coarser exponent
        let coarse: FixedPoint<i8, -1> = multiply(a, b);
        assert_eq!(coarse.to_float::<f64>(), -8.0);
    }

    #[test]
    fn mixed_signedness_product() {
        let a = SQ7x8::from_int(-3);
        let b = Q8x8::from_float(2.5);
        let product: SQ15x16 = multiply(a, b);
        assert_eq!(product.to_float::<f64>(), -7.5);
    }

    #[test]
    fn wide_products() {
        let a = SQ63x64::from_int(i64::MAX);
        let b = SQ63x64::from_float(-0.5);
        let product: SQ63x64 = multiply(a, b);
        assert_eq!(product.to_float::<f64>(), -(i64::MAX as f64) / 2.0);

        let c = Q64x64::from_int(1u64 << 40);
        let square: Q64x64 = multiply(c, Q64x64::from_int(1u32 << 20));
        assert_eq!(square.to_int::<u64>(), 1 << 60);
    }

    // ---------- divide ----------

    #[test]
    fn quotient_truncates_then_rescales() {
        let seven = SQ7x8::from_int(7);
        let two = SQ7x8::from_int(2);
        let minus_seven = SQ7x8::from_int(-7);

        let q: FixedPoint<i16, 0> = divide(seven, two);
        assert_eq!(q.data(), 3);
        // the rescale into a coarser quotient floors
        let q: FixedPoint<i16, 0> = divide(minus_seven, two);
        assert_eq!(q.data(), -4);
        let q: SQ7x8 = divide(minus_seven, two);
        assert_eq!(q.to_float::<f64>(), -3.5);

        let third: SQ7x8 = divide(SQ7x8::from_int(1), SQ7x8::from_int(3));
        assert_eq!(third.data(), 85);
        let third: SQ7x8 = divide(SQ7x8::from_int(-1), SQ7x8::from_int(3));
        assert_eq!(third.data(), -85);

        // precision is bounded by the intermediate, not by the quotient type
        let third: SQ15x16 = divide(SQ7x8::from_int(1), SQ7x8::from_int(3));
        assert_eq!(third.data(), 85 << 8);
    }

    #[test]
    fn quotient_across_widths() {
        let q: SQ31x32 = divide(SQ3x4::from_float(-7.5), Q64x64::from_int(4u8));
        assert_eq!(q.to_float::<f64>(), -1.875);

        let q: Q64x64 = divide(Q64x64::from_int(1u8), Q64x64::from_int(3u8));
        assert_eq!(q.data(), (u64::MAX / 3) as u128);
    }

    #[test]
    fn unsigned_wide_dividend_by_signed_divisor() {
        let q = Q64x64::from_int(u64::MAX) / 2i32;
        assert_eq!(q.to_int::<u64>(), 9223372036854775807);

        let q = Q64x64::from_int(1u64 << 63) / 3i8;
        assert_eq!(q.to_int::<u64>(), 3074457345618258602);

        // the aligned dividend fills the top bit of the intermediate
        let q: FixedPoint<u128, -128> = divide(
            FixedPoint::<u128, -128>::from_float(0.75),
            FixedPoint::<i8, 0>::from_int(3),
        );
        assert_eq!(q.to_float::<f64>(), 0.25);
    }

    #[test]
    fn unsigned_dividend_by_negative_divisor() {
        let q: SQ63x64 = divide(Q64x64::from_int(6u8), FixedPoint::<i8, 0>::from_int(-4));
        assert_eq!(q.to_float::<f64>(), -1.5);

        let q: SQ63x64 = divide(Q64x64::from_int(1u64 << 62), SQ63x64::from_int(-2));
        assert_eq!(q.to_int::<i64>(), -(1 << 61));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn divide_by_zero() {
        let _: SQ7x8 = divide(SQ7x8::from_int(1), SQ3x4::ZERO);
    }

    // ---------- add ----------

    #[test]
    fn add_converts_each_addend() {
        let values = [SQ3x4::from_float(7.5), SQ3x4::from_float(7.5), SQ3x4::from_float(-1.25)];
        let sum: SQ7x8 = add(&values);
        assert_eq!(sum.to_float::<f64>(), 13.75);

        let empty: SQ7x8 = add::<SQ7x8, SQ3x4>(&[]);
        assert!(empty.is_zero());
    }

    // ---------- sqrt ----------

    #[test]
    fn sqrt_of_two() {
        let root = sqrt(SQ15x16::from_int(2));
        assert_eq!(root.data(), 92681);
    }

    #[test]
    fn sqrt_exact_squares() {
        assert_eq!(sqrt(SQ3x4::from_int(4)).to_float::<f64>(), 2.0);
        assert_eq!(sqrt(SQ3x4::from_float(0.25)).to_float::<f64>(), 0.5);
        assert_eq!(sqrt(Q8x8::from_int(225)).to_int::<u32>(), 15);
        assert_eq!(sqrt(FixedPoint::<i32, 2>::from_int(64)).to_int::<i32>(), 8);
        assert!(sqrt(SQ7x8::ZERO).is_zero());
    }

    #[test]
    fn sqrt_wide_tier() {
        assert_eq!(sqrt(SQ63x64::from_int(1i64 << 62)).to_int::<i64>(), 1 << 31);
        assert_eq!(sqrt(Q64x64::from_int(u64::MAX)).to_int::<u64>(), u32::MAX as u64);
        let root = sqrt(SQ63x64::from_int(2)).to_float::<f64>();
        assert!((root - core::f64::consts::SQRT_2).abs() < 1e-15);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "square root of a negative value")]
    fn sqrt_of_negative() {
        sqrt(SQ7x8::from_int(-1));
    }

    // ---------- common type ----------

    #[test]
    fn common_type_arithmetic() {
        let a = SQ3x4::from_float(1.5);
        let b = FixedPoint::<i16, -4>::from_int(100);

        let sum: common_type!(SQ3x4, FixedPoint<i16, -4>) = common_add(a, b);
        assert_eq!(sum.to_float::<f64>(), 101.5);
        let difference: common_type!(SQ3x4, FixedPoint<i16, -4>) = common_sub(a, b);
        assert_eq!(difference.to_float::<f64>(), -98.5);
        let product: common_type!(SQ3x4, FixedPoint<i16, -4>) = common_mul(a, b);
        assert_eq!(product.to_float::<f64>(), 150.0);
        let quotient: common_type!(SQ3x4, FixedPoint<i16, -4>) = common_div(b, a);
        assert_eq!(quotient.to_float::<f64>(), 66.625);
    }
}
