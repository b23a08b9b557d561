/// Macro to construct signed integer types that wrap unsigned types
#[macro_export]
macro_rules! construct_sint {
    ( $(#[$attr:meta])* $visibility:vis struct $sname:ident ( $uname:ident ); ) => {
        /// Signed two's complement integer wrapping an unsigned type
        #[repr(transparent)]
        $(#[$attr])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        $visibility struct $sname($uname);

        impl $sname {
            /// The number of bits in this signed integer type
            pub const BITS: u32 = 64 * Self::WORDS as u32;
            /// The number of words in the underlying unsigned type
            const WORDS: usize = ::core::mem::size_of::<$uname>() / 8;

            /// Maximum positive value (2^(n-1) - 1)
            pub const MAX: $sname = {
                let mut words = [u64::MAX; Self::WORDS];
                words[Self::WORDS - 1] = u64::MAX >> 1;
                $sname($uname(words))
            };

            /// Minimum negative value (-2^(n-1))
            pub const MIN: $sname = {
                let mut words = [0u64; Self::WORDS];
                words[Self::WORDS - 1] = 1u64 << 63;
                $sname($uname(words))
            };

            pub const fn zero() -> Self {
                Self($uname([0u64; Self::WORDS]))
            }

            pub const fn one() -> Self {
                let mut words = [0u64; Self::WORDS];
                words[0] = 1;
                Self($uname(words))
            }

            /// All bits set
            pub const fn minus_one() -> Self {
                Self($uname([u64::MAX; Self::WORDS]))
            }

            /// Check if this number is negative
            pub const fn is_negative(&self) -> bool {
                (self.0).0[Self::WORDS - 1] >> 63 == 1
            }

            pub fn is_zero(&self) -> bool {
                self.0.is_zero()
            }

            /// Magnitude as the unsigned backing type; `MIN` maps to 2^(n-1).
            #[inline]
            pub fn unsigned_abs(&self) -> $uname {
                if self.is_negative() {
                    self.wrapping_neg().0
                } else {
                    self.0
                }
            }

            /// Wrapping negation using two's complement
            #[inline]
            pub fn wrapping_neg(&self) -> Self {
                Self((!self.0).overflowing_add(Self::one().0).0)
            }

            #[inline]
            pub fn wrapping_add(self, other: Self) -> Self {
                Self(self.0.overflowing_add(other.0).0)
            }

            #[inline]
            pub fn wrapping_sub(self, other: Self) -> Self {
                Self(self.0.overflowing_sub(other.0).0)
            }

            /// Low `BITS` of the product; identical for signed and unsigned operands.
            #[inline]
            pub fn wrapping_mul(self, other: Self) -> Self {
                Self(self.0.overflowing_mul(other.0).0)
            }

            /// Wrapping division (trunc toward zero).
            /// Panics on division by zero (to mirror Rust primitives).
            #[inline]
            pub fn wrapping_div(self, other: Self) -> Self {
                if other.is_zero() { panic!("attempt to divide by zero"); }

                // MIN / -1 wraps to MIN
                if self == Self::MIN && other == Self::minus_one() {
                    return Self::MIN;
                }

                let q = self.unsigned_abs() / other.unsigned_abs();
                let quotient = Self(q);
                if self.is_negative() ^ other.is_negative() { quotient.wrapping_neg() } else { quotient }
            }

            /// Reinterpret as the underlying unsigned type
            pub const fn to_unsigned(self) -> $uname {
                self.0
            }

            /// Reinterpret an unsigned value as signed
            pub const fn from_unsigned(value: $uname) -> Self {
                Self(value)
            }

            /// Right shift by `rhs` bits, filling with the sign bit (floor division by 2^rhs)
            #[inline]
            pub fn arithmetic_shr(self, rhs: usize) -> Self {
                if rhs == 0 { return self; }
                if rhs >= Self::BITS as usize {
                    return if self.is_negative() { Self::minus_one() } else { Self::zero() };
                }

                let logical = self.0 >> rhs;
                if !self.is_negative() {
                    Self(logical)
                } else {
                    // fill the top `rhs` bits with 1s to preserve the sign
                    let mask = (!$uname([0u64; Self::WORDS])) << (Self::BITS as usize - rhs);
                    Self(logical | mask)
                }
            }
        }

        impl Default for $sname {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl From<i128> for $sname {
            fn from(value: i128) -> Self {
                let bits = value as u128;
                let fill = if value < 0 { u64::MAX } else { 0 };

                let mut words = [fill; Self::WORDS];
                words[0] = bits as u64;
                words[1] = (bits >> 64) as u64;
                Self($uname(words))
            }
        }

        impl PartialOrd for $sname {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $sname {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                use ::core::cmp::Ordering;

                // same sign: two's complement bit patterns order like the values
                match (self.is_negative(), other.is_negative()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => self.0.cmp(&other.0),
                }
            }
        }

        impl ::core::fmt::Display for $sname {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                if self.is_negative() {
                    write!(f, "-{}", self.unsigned_abs())
                } else {
                    write!(f, "{}", self.0)
                }
            }
        }

        impl ::core::fmt::Debug for $sname {
            fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Names the `FixedPoint` specialization described by a [`Format`](crate::resolve::Format)
/// constant expression.
///
/// Only usable where the expression does not depend on generic parameters.
///
/// ```
/// use binary_fixed::{fixed_type, resolve::make_fixed};
///
/// type Angle = fixed_type!(make_fixed(3, 12, true));
/// assert_eq!(Angle::EXPONENT, -12);
/// ```
#[macro_export]
macro_rules! fixed_type {
    ($format:expr) => {
        $crate::fixed_point::FixedPoint<
            $crate::width::MakeInt<{ ($format).repr.bytes() }, { ($format).repr.signed }>,
            { ($format).exponent },
        >
    };
}

/// Signed fixed-point type with at least `I` integer and `F` fractional digits.
#[macro_export]
macro_rules! make_fixed {
    ($integer_digits:expr, $fractional_digits:expr) => {
        $crate::fixed_type!($crate::resolve::make_fixed($integer_digits, $fractional_digits, true))
    };
}

/// Unsigned fixed-point type with at least `I` integer and `F` fractional digits.
#[macro_export]
macro_rules! make_ufixed {
    ($integer_digits:expr, $fractional_digits:expr) => {
        $crate::fixed_type!($crate::resolve::make_fixed($integer_digits, $fractional_digits, false))
    };
}

/// Fixed-point type over representation `R` with exactly `I` integer digits.
#[macro_export]
macro_rules! make_fixed_from_repr {
    ($repr:ty, $integer_digits:expr) => {
        $crate::fixed_type!($crate::resolve::make_fixed_from_repr(
            <$repr as $crate::width::Integer>::FORMAT,
            $integer_digits
        ))
    };
}

/// Smallest built-in integer holding `bits` bits of the given signedness.
#[macro_export]
macro_rules! sufficient_repr {
    ($bits:expr, $signed:expr) => {
        $crate::width::MakeInt<
            { $crate::width::sufficient_repr($bits, $signed).bytes() },
            { $signed },
        >
    };
}

#[macro_export]
macro_rules! common_type {
    ($lhs:ty, $rhs:ty) => {
        $crate::fixed_type!($crate::resolve::common_fixed(
            <$lhs as $crate::fixed_point::Scaled>::FORMAT,
            <$rhs as $crate::fixed_point::Scaled>::FORMAT
        ))
    };
}

#[macro_export]
macro_rules! promote_result {
    ($t:ty) => {
        $crate::fixed_type!($crate::resolve::promote(<$t as $crate::fixed_point::Scaled>::FORMAT))
    };
}

#[macro_export]
macro_rules! demote_result {
    ($t:ty) => {
        $crate::fixed_type!($crate::resolve::demote(<$t as $crate::fixed_point::Scaled>::FORMAT))
    };
}

/// Result of adding `n` values of type `$t` (two when omitted).
#[macro_export]
macro_rules! trunc_add_result {
    ($t:ty) => {
        $crate::trunc_add_result!($t, 2)
    };
    ($t:ty, $n:expr) => {
        $crate::fixed_type!($crate::resolve::trunc_add(
            <$t as $crate::fixed_point::Scaled>::FORMAT,
            $n
        ))
    };
}

/// Result of subtracting `$rhs` from `$lhs` without overflow.
#[macro_export]
macro_rules! trunc_subtract_result {
    ($lhs:ty) => {
        $crate::trunc_subtract_result!($lhs, $lhs)
    };
    ($lhs:ty, $rhs:ty) => {
        $crate::fixed_type!($crate::resolve::trunc_subtract(
            <$lhs as $crate::fixed_point::Scaled>::FORMAT,
            <$rhs as $crate::fixed_point::Scaled>::FORMAT
        ))
    };
}

/// Same-width product of `$lhs` and `$rhs`, keeping the integer digits.
#[macro_export]
macro_rules! trunc_multiply_result {
    ($lhs:ty) => {
        $crate::trunc_multiply_result!($lhs, $lhs)
    };
    ($lhs:ty, $rhs:ty) => {
        $crate::fixed_type!($crate::resolve::trunc_multiply(
            <$lhs as $crate::fixed_point::Scaled>::FORMAT,
            <$rhs as $crate::fixed_point::Scaled>::FORMAT
        ))
    };
}

/// Same-width quotient of `$lhs` by `$rhs`, keeping the integer digits.
#[macro_export]
macro_rules! trunc_divide_result {
    ($lhs:ty) => {
        $crate::trunc_divide_result!($lhs, $lhs)
    };
    ($lhs:ty, $rhs:ty) => {
        $crate::fixed_type!($crate::resolve::trunc_divide(
            <$lhs as $crate::fixed_point::Scaled>::FORMAT,
            <$rhs as $crate::fixed_point::Scaled>::FORMAT
        ))
    };
}

#[macro_export]
macro_rules! promote_multiply_result {
    ($lhs:ty) => {
        $crate::promote_multiply_result!($lhs, $lhs)
    };
    ($lhs:ty, $rhs:ty) => {
        $crate::fixed_type!($crate::resolve::promote_multiply(
            <$lhs as $crate::fixed_point::Scaled>::FORMAT,
            <$rhs as $crate::fixed_point::Scaled>::FORMAT
        ))
    };
}

#[macro_export]
macro_rules! promote_divide_result {
    ($lhs:ty) => {
        $crate::promote_divide_result!($lhs, $lhs)
    };
    ($lhs:ty, $rhs:ty) => {
        $crate::fixed_type!($crate::resolve::promote_divide(
            <$lhs as $crate::fixed_point::Scaled>::FORMAT,
            <$rhs as $crate::fixed_point::Scaled>::FORMAT
        ))
    };
}

#[macro_export]
macro_rules! trunc_reciprocal_result {
    ($t:ty) => {
        $crate::fixed_type!($crate::resolve::trunc_reciprocal(<$t as $crate::fixed_point::Scaled>::FORMAT))
    };
}

/// Unsigned same-width type holding the square of a `$t`.
#[macro_export]
macro_rules! trunc_square_result {
    ($t:ty) => {
        $crate::fixed_type!($crate::resolve::trunc_square(<$t as $crate::fixed_point::Scaled>::FORMAT))
    };
}

#[macro_export]
macro_rules! trunc_sqrt_result {
    ($t:ty) => {
        $crate::fixed_type!($crate::resolve::trunc_sqrt(<$t as $crate::fixed_point::Scaled>::FORMAT))
    };
}

/// Unsigned type with twice the integer and fractional digits of `$t`.
#[macro_export]
macro_rules! promote_square_result {
    ($t:ty) => {
        $crate::fixed_type!($crate::resolve::promote_square(<$t as $crate::fixed_point::Scaled>::FORMAT))
    };
}
