//! Operations whose result type is sized from the operand types.
//!
//! Each function takes its output type as a generic parameter and checks it
//! against the matching `resolve` descriptor at compile time. The
//! `*_result!` macros name the expected type:
//!
//! ```
//! use binary_fixed::{derived::trunc_multiply, trunc_multiply_result, SQ3x4};
//!
//! let x = SQ3x4::from_float(2.5);
//! let y: trunc_multiply_result!(SQ3x4) = trunc_multiply(x, SQ3x4::from_int(3));
//! assert_eq!(y.to_float::<f64>(), 7.5);
//! ```

use crate::arith::{self, divide, divide_aligned, multiply};
use crate::fixed_point::{FixedPoint, Scaled};
use crate::resolve;
use crate::shift::shift_right;
use crate::width::{Integer, Repr};

/// Doubles the representation width and the exponent.
pub fn promote<Out: Scaled, S: Scaled>(x: S) -> Out {
    const { assert!(Out::FORMAT.same(resolve::promote(S::FORMAT)), "output type must be the promoted type") };
    Out::from_fixed(x)
}

/// Halves the representation width and the exponent.
pub fn demote<Out: Scaled, S: Scaled>(x: S) -> Out {
    const { assert!(Out::FORMAT.same(resolve::demote(S::FORMAT)), "output type must be the demoted type") };
    Out::from_fixed(x)
}

/// Sum of `N` values, with just enough extra integer digits that it cannot
/// overflow.
pub fn trunc_add<Out: Scaled, F: Scaled, const N: usize>(addends: [F; N]) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::trunc_add(F::FORMAT, N)),
            "output type must be trunc_add_result"
        )
    };
    arith::add(&addends)
}

pub fn trunc_subtract<Out: Scaled, L: Scaled, Rt: Scaled>(minuend: L, subtrahend: Rt) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::trunc_subtract(L::FORMAT, Rt::FORMAT)),
            "output type must be trunc_subtract_result"
        )
    };
    Out::from_fixed(minuend) - Out::from_fixed(subtrahend)
}

pub fn trunc_multiply<Out: Scaled, L: Scaled, Rt: Scaled>(lhs: L, rhs: Rt) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::trunc_multiply(L::FORMAT, Rt::FORMAT)),
            "output type must be trunc_multiply_result"
        )
    };
    multiply(lhs, rhs)
}

pub fn trunc_divide<Out: Scaled, L: Scaled, Rt: Scaled>(dividend: L, divisor: Rt) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::trunc_divide(L::FORMAT, Rt::FORMAT)),
            "output type must be trunc_divide_result"
        )
    };
    divide(dividend, divisor)
}

/// `1 / x`, in the width of `x` with room for the reciprocal's integer digits.
///
/// The dividend is the value 1 held with a single integer digit in the
/// output representation.
pub fn trunc_reciprocal<Out: Scaled, S: Scaled>(x: S) -> Out {
    let (dividend_exponent, intermediate) = const {
        assert!(
            Out::FORMAT.same(resolve::trunc_reciprocal(S::FORMAT)),
            "output type must be trunc_reciprocal_result"
        );
        let dividend = resolve::make_fixed_from_repr(<Out::Repr as Integer>::FORMAT, 1);
        (dividend.exponent, resolve::divide_intermediate(Out::FORMAT, dividend, S::FORMAT))
    };

    let one = shift_right::<Out::Repr, u8>(1, dividend_exponent);
    divide_aligned::<Out, Out::Repr, S>(one, dividend_exponent, intermediate, x)
}

pub fn trunc_square<Out: Scaled, S: Scaled>(x: S) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::trunc_square(S::FORMAT)),
            "output type must be trunc_square_result"
        )
    };
    multiply(x, x)
}

pub fn trunc_sqrt<Out: Scaled, R: Repr, const E: i32>(x: FixedPoint<R, E>) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::trunc_sqrt(resolve::Format::new(R::FORMAT, E))),
            "output type must be trunc_sqrt_result"
        )
    };
    Out::from_fixed(arith::sqrt(x))
}

/// Product in the promoted common type; never overflows.
pub fn promote_multiply<Out: Scaled, L: Scaled, Rt: Scaled>(lhs: L, rhs: Rt) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::promote_multiply(L::FORMAT, Rt::FORMAT)),
            "output type must be promote_multiply_result"
        )
    };
    multiply(lhs, rhs)
}

pub fn promote_divide<Out: Scaled, L: Scaled, Rt: Scaled>(dividend: L, divisor: Rt) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::promote_divide(L::FORMAT, Rt::FORMAT)),
            "output type must be promote_divide_result"
        )
    };
    divide(dividend, divisor)
}

/// `x²` as an unsigned type with twice the integer and fractional digits.
pub fn promote_square<Out: Scaled, S: Scaled>(x: S) -> Out {
    const {
        assert!(
            Out::FORMAT.same(resolve::promote_square(S::FORMAT)),
            "output type must be promote_square_result"
        )
    };
    multiply(x, x)
}

impl<R: Repr, const E: i32> FixedPoint<R, E> {
    /// Reinterprets the bits at exponent `E + N`, multiplying the value by
    /// `2^N` without touching the representation.
    ///
    /// ```
    /// use binary_fixed::{FixedPoint, SQ3x4};
    ///
    /// let x = SQ3x4::from_float(3.5);
    /// let y = x.trunc_shift_left::<2, FixedPoint<i8, -2>>();
    /// assert_eq!(y.to_float::<f64>(), 14.0);
    /// ```
    #[inline]
    pub fn trunc_shift_left<const N: i32, Out: Scaled<Repr = R>>(self) -> Out {
        const { assert!(Out::EXPONENT == E + N, "output exponent must be E + N") };
        Out::from_data(self.0)
    }

    /// Reinterprets the bits at exponent `E - N`, dividing the value by `2^N`.
    #[inline]
    pub fn trunc_shift_right<const N: i32, Out: Scaled<Repr = R>>(self) -> Out {
        const { assert!(Out::EXPONENT == E - N, "output exponent must be E - N") };
        Out::from_data(self.0)
    }
}
