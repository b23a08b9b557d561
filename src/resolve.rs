//! Result-type resolution.
//!
//! Each operation's result type is a pure function of its operand types. The
//! functions here compute that mapping on [`Format`] descriptors in `const`
//! context; [`fixed_type!`](crate::fixed_type) turns a descriptor back into a
//! type, and the generic operations assert that a caller-chosen output type
//! matches the descriptor.

use crate::width::{self, capacity, common_repr_type, IntFormat, Integer};

/// Representation and exponent of a fixed-point type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format {
    pub repr: IntFormat,
    pub exponent: i32,
}

impl Format {
    pub const fn new(repr: IntFormat, exponent: i32) -> Self {
        Self { repr, exponent }
    }

    pub const fn digits(self) -> i32 {
        self.repr.digits()
    }

    pub const fn integer_digits(self) -> i32 {
        self.digits() + self.exponent
    }

    pub const fn fractional_digits(self) -> i32 {
        self.digits() - self.integer_digits()
    }

    pub const fn same(self, other: Self) -> bool {
        self.repr.same(other.repr) && self.exponent == other.exponent
    }
}

/// The numeric categories an operand can fall into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Integer(IntFormat),
    Float { bytes: usize },
    Fixed(Format),
}

impl Kind {
    pub const fn same(self, other: Self) -> bool {
        match (self, other) {
            (Kind::Integer(a), Kind::Integer(b)) => a.same(b),
            (Kind::Float { bytes: a }, Kind::Float { bytes: b }) => a == b,
            (Kind::Fixed(a), Kind::Fixed(b)) => a.same(b),
            _ => false,
        }
    }
}

/// A value that takes part in mixed arithmetic.
pub trait Numeric: Copy {
    const KIND: Kind;
}

macro_rules! impl_numeric_integer {
    ($($t:ty),*) => {$(
        impl Numeric for $t {
            const KIND: Kind = Kind::Integer(<$t as Integer>::FORMAT);
        }
    )*};
}

impl_numeric_integer!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128);

impl Numeric for f32 {
    const KIND: Kind = Kind::Float { bytes: 4 };
}

impl Numeric for f64 {
    const KIND: Kind = Kind::Float { bytes: 8 };
}

const fn max(a: i32, b: i32) -> i32 {
    if a > b {
        a
    } else {
        b
    }
}

/// Smallest type with at least the given integer and fractional digits.
pub const fn make_fixed(integer_digits: i32, fractional_digits: i32, signed: bool) -> Format {
    let digits = integer_digits + fractional_digits + signed as i32;
    let repr = width::sufficient_repr(digits, signed);
    Format::new(repr, integer_digits + signed as i32 - repr.bits as i32)
}

/// Type over `repr` with exactly `integer_digits` integer digits.
pub const fn make_fixed_from_repr(repr: IntFormat, integer_digits: i32) -> Format {
    Format::new(repr, integer_digits + repr.signed as i32 - repr.bits as i32)
}

pub const fn common_fixed(lhs: Format, rhs: Format) -> Format {
    make_fixed_from_repr(
        common_repr_type(lhs.repr, rhs.repr),
        max(lhs.integer_digits(), rhs.integer_digits()),
    )
}

/// Type in which a binary operation between the two kinds is carried out.
///
/// Symmetric; at least one side must be fixed-point.
pub const fn common_type(lhs: Kind, rhs: Kind) -> Kind {
    match (lhs, rhs) {
        (Kind::Fixed(a), Kind::Fixed(b)) => Kind::Fixed(common_fixed(a, b)),
        (Kind::Fixed(a), Kind::Integer(_)) | (Kind::Integer(_), Kind::Fixed(a)) => Kind::Fixed(a),
        (Kind::Fixed(a), Kind::Float { bytes }) | (Kind::Float { bytes }, Kind::Fixed(a)) => {
            let own = width::make_float(a.repr.bytes());
            Kind::Float { bytes: if own > bytes { own } else { bytes } }
        }
        _ => panic!("common type needs a fixed-point operand"),
    }
}

pub const fn common_kind<A: Numeric, B: Numeric>() -> Kind {
    common_type(A::KIND, B::KIND)
}

pub const fn promote(format: Format) -> Format {
    Format::new(width::next_size(format.repr), format.exponent * 2)
}

pub const fn demote(format: Format) -> Format {
    Format::new(width::previous_size(format.repr), format.exponent / 2)
}

pub const fn trunc_add(format: Format, addends: usize) -> Format {
    assert!(addends > 0, "trunc_add needs at least one addend");
    make_fixed_from_repr(
        format.repr,
        format.integer_digits() + capacity(addends as u64 - 1) as i32,
    )
}

pub const fn trunc_subtract(lhs: Format, rhs: Format) -> Format {
    let bits = if lhs.repr.bits > rhs.repr.bits { lhs.repr.bits } else { rhs.repr.bits };
    make_fixed_from_repr(
        IntFormat::new(bits, true),
        max(lhs.integer_digits(), rhs.integer_digits()) + 1,
    )
}

pub const fn trunc_multiply(lhs: Format, rhs: Format) -> Format {
    make_fixed_from_repr(
        common_repr_type(lhs.repr, rhs.repr),
        lhs.integer_digits() + rhs.integer_digits(),
    )
}

pub const fn trunc_divide(dividend: Format, divisor: Format) -> Format {
    make_fixed_from_repr(
        common_repr_type(dividend.repr, divisor.repr),
        dividend.integer_digits() + divisor.fractional_digits(),
    )
}

pub const fn trunc_reciprocal(format: Format) -> Format {
    make_fixed_from_repr(format.repr, format.fractional_digits() + 1)
}

pub const fn trunc_square(format: Format) -> Format {
    make_fixed_from_repr(format.repr.unsigned(), format.integer_digits() * 2)
}

pub const fn trunc_sqrt(format: Format) -> Format {
    make_fixed_from_repr(format.repr.unsigned(), (format.integer_digits() + 1) / 2)
}

pub const fn promote_multiply(lhs: Format, rhs: Format) -> Format {
    promote(common_fixed(lhs, rhs))
}

pub const fn promote_divide(lhs: Format, rhs: Format) -> Format {
    promote(common_fixed(lhs, rhs))
}

pub const fn promote_square(format: Format) -> Format {
    make_fixed(format.integer_digits() * 2, format.fractional_digits() * 2, false)
}

/// Format a dividend is widened to before an integer division, so that the
/// quotient keeps the result's integer and fractional digits.
///
/// May describe up to 256 bits.
pub const fn divide_intermediate(quotient: Format, dividend: Format, divisor: Format) -> Format {
    make_fixed(
        max(
            quotient.integer_digits(),
            dividend.integer_digits() + divisor.fractional_digits(),
        ),
        max(
            quotient.fractional_digits(),
            dividend.fractional_digits() + divisor.integer_digits(),
        ),
        quotient.repr.signed || dividend.repr.signed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const I8: IntFormat = IntFormat::new(8, true);
    const U8: IntFormat = IntFormat::new(8, false);
    const I16: IntFormat = IntFormat::new(16, true);
    const U16: IntFormat = IntFormat::new(16, false);
    const I32: IntFormat = IntFormat::new(32, true);

    #[test]
    fn digit_counts() {
        let f = Format::new(I8, -4);
        assert_eq!(f.digits(), 7);
        assert_eq!(f.integer_digits(), 3);
        assert_eq!(f.fractional_digits(), 4);

        let wide_exponent = Format::new(U8, 3);
        assert_eq!(wide_exponent.integer_digits(), 11);
        assert_eq!(wide_exponent.fractional_digits(), -3);
    }

    #[test]
    fn make_fixed_picks_smallest_repr() {
        assert_eq!(make_fixed(3, 4, true), Format::new(I8, -4));
        assert_eq!(make_fixed(7, 8, true), Format::new(I16, -8));
        assert_eq!(make_fixed(8, 8, false), Format::new(U16, -8));
        assert_eq!(make_fixed(8, 8, true), Format::new(I32, -23));
        assert_eq!(make_fixed(100, 100, true).repr, IntFormat::new(256, true));
    }

    #[test]
    fn make_fixed_from_repr_exponent() {
        assert_eq!(make_fixed_from_repr(I8, 1), Format::new(I8, -6));
        assert_eq!(make_fixed_from_repr(U8, 1), Format::new(U8, -7));
        assert_eq!(make_fixed_from_repr(I16, 20), Format::new(I16, 5));
    }

    #[test]
    fn common_fixed_keeps_most_integer_digits() {
        let a = Format::new(I8, -4);
        let b = Format::new(U16, -12);
        let c = common_fixed(a, b);
        assert_eq!(c.repr, I16);
        assert_eq!(c.integer_digits(), 4);
        assert_eq!(c, common_fixed(b, a));
        assert_eq!(common_fixed(a, a), a);
    }

    #[test]
    fn common_type_over_kinds() {
        let fixed = Kind::Fixed(Format::new(I8, -4));
        let int = Kind::Integer(I32);

        assert!(common_type(fixed, int).same(fixed));
        assert!(common_type(int, fixed).same(fixed));
        assert!(common_type(fixed, Kind::Float { bytes: 8 }).same(Kind::Float { bytes: 8 }));
        assert!(common_type(Kind::Float { bytes: 4 }, fixed).same(Kind::Float { bytes: 4 }));

        let wide = Kind::Fixed(Format::new(IntFormat::new(64, true), -32));
        assert!(common_type(wide, Kind::Float { bytes: 4 }).same(Kind::Float { bytes: 8 }));
        assert!(common_kind::<crate::SQ3x4, i32>().same(fixed));
        assert!(common_kind::<f64, crate::SQ3x4>().same(Kind::Float { bytes: 8 }));
    }

    #[test]
    #[should_panic(expected = "common type needs a fixed-point operand")]
    fn common_type_without_fixed_operand() {
        common_type(Kind::Integer(I8), Kind::Float { bytes: 4 });
    }

    #[test]
    fn promote_and_demote() {
        let f = Format::new(I8, -4);
        assert_eq!(promote(f), Format::new(I16, -8));
        assert_eq!(demote(promote(f)), f);
        assert_eq!(demote(Format::new(I16, -7)), Format::new(I8, -3));
    }

    #[test]
    fn trunc_results() {
        let f = Format::new(I8, -4);
        assert_eq!(trunc_add(f, 1).integer_digits(), 3);
        assert_eq!(trunc_add(f, 2).integer_digits(), 4);
        assert_eq!(trunc_add(f, 4).integer_digits(), 5);
        assert_eq!(trunc_add(f, 5).integer_digits(), 6);

        let s = trunc_subtract(Format::new(U8, -4), Format::new(U8, -2));
        assert_eq!(s, make_fixed_from_repr(I8, 7));

        assert_eq!(trunc_multiply(f, f), Format::new(I8, -1));
        assert_eq!(trunc_divide(f, f), Format::new(I8, 0));
        assert_eq!(trunc_reciprocal(f), Format::new(I8, -2));
        assert_eq!(trunc_square(f), Format::new(U8, -2));
        assert_eq!(trunc_sqrt(f), Format::new(U8, -6));
    }

    #[test]
    fn promote_results() {
        let f = Format::new(I8, -4);
        assert_eq!(promote_multiply(f, f), Format::new(I16, -8));
        assert_eq!(promote_divide(f, Format::new(U8, -4)), Format::new(I16, -6));
        assert_eq!(promote_square(f), Format::new(U16, -10));
    }

    #[test]
    fn divide_intermediate_holds_quotient_digits() {
        let q = trunc_reciprocal(Format::new(I8, -4));
        let dividend = make_fixed_from_repr(I8, 1);
        let inter = divide_intermediate(q, dividend, Format::new(I8, -4));
        assert_eq!(inter, Format::new(I16, -10));
    }
}
