//! Bit-width utilities: integer and float traits, size arithmetic and the
//! type-level tables that map sizes back to built-in types.

use crate::integers::{I256, U256};
use core::fmt;
use core::hash::Hash;
use core::ops::{Add, Div, Mul, Sub};

/// Width and signedness of an integer representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntFormat {
    pub bits: u32,
    pub signed: bool,
}

impl IntFormat {
    pub const fn new(bits: u32, signed: bool) -> Self {
        Self { bits, signed }
    }

    pub const fn bytes(self) -> usize {
        (self.bits / 8) as usize
    }

    /// Number of value bits, excluding the sign bit.
    pub const fn digits(self) -> i32 {
        self.bits as i32 - self.signed as i32
    }

    pub const fn unsigned(self) -> Self {
        Self::new(self.bits, false)
    }

    pub const fn signed(self) -> Self {
        Self::new(self.bits, true)
    }

    pub const fn same(self, other: Self) -> bool {
        self.bits == other.bits && self.signed == other.signed
    }
}

/// Two's complement integer usable as a representation or an intermediate.
///
/// The conversions move raw bit patterns: widening sign- or zero-extends
/// according to `SIGNED`, narrowing keeps the low bits.
pub trait Integer:
    Copy + Ord + Hash + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const BITS: u32;
    const SIGNED: bool;
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;
    const FORMAT: IntFormat = IntFormat::new(Self::BITS, Self::SIGNED);

    fn to_u128_bits(self) -> u128;
    fn from_u128_bits(bits: u128) -> Self;
    fn to_i256(self) -> I256;
    fn from_i256(value: I256) -> Self;
}

/// Built-in integer that can back a [`FixedPoint`](crate::FixedPoint).
pub trait Repr: Integer + Add<Output = Self> + Sub<Output = Self> {
    /// Double-width intermediate (`I256`/`U256` above 64 bits).
    type Wide: Integer;
    /// Float of the same byte size (`f64` stands in for 16 bytes).
    type Float: Float;

    fn to_f32(self) -> f32;
    fn to_f64(self) -> f64;
    /// Truncating, saturating conversion (`as`).
    fn from_f32(value: f32) -> Self;
    /// Truncating, saturating conversion (`as`).
    fn from_f64(value: f64) -> Self;
}

pub trait Float:
    Copy
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + CommonFloatWith<f32>
    + CommonFloatWith<f64>
    + Send
    + Sync
    + 'static
{
    const BYTES: usize;

    /// Exactly 2^exponent, saturating to infinity or zero outside the range.
    fn pow2(exponent: i32) -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
    fn from_repr<R: Repr>(repr: R) -> Self;
    fn to_repr<R: Repr>(self) -> R;
}

macro_rules! impl_integer {
    ($($t:ty => $signed:expr),* $(,)?) => {$(
        impl Integer for $t {
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
            const ZERO: Self = 0;
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn to_u128_bits(self) -> u128 {
                self as u128
            }

            #[inline]
            fn from_u128_bits(bits: u128) -> Self {
                bits as $t
            }

            #[inline]
            fn to_i256(self) -> I256 {
                if $signed {
                    I256::from(self as i128)
                } else {
                    let bits = self as u128;
                    I256::from_unsigned(U256([bits as u64, (bits >> 64) as u64, 0, 0]))
                }
            }

            #[inline]
            fn from_i256(value: I256) -> Self {
                let U256(ref words) = value.to_unsigned();
                (words[0] as u128 | (words[1] as u128) << 64) as $t
            }
        }
    )*};
}

impl_integer! {
    i8 => true, u8 => false,
    i16 => true, u16 => false,
    i32 => true, u32 => false,
    i64 => true, u64 => false,
    i128 => true, u128 => false,
}

macro_rules! impl_repr {
    ($($t:ty => $wide:ty, $float:ty;)*) => {$(
        impl Repr for $t {
            type Wide = $wide;
            type Float = $float;

            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f32(value: f32) -> Self {
                value as $t
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_repr! {
    i8 => i16, f32;
    u8 => u16, f32;
    i16 => i32, f32;
    u16 => u32, f32;
    i32 => i64, f32;
    u32 => u64, f32;
    i64 => i128, f64;
    u64 => u128, f64;
    i128 => I256, f64;
    u128 => U256, f64;
}

impl Float for f32 {
    const BYTES: usize = 4;

    fn pow2(exponent: i32) -> f32 {
        match exponent {
            128.. => f32::INFINITY,
            -126..=127 => f32::from_bits(((exponent + 127) as u32) << 23),
            -149..=-127 => f32::from_bits(1u32 << (exponent + 149)),
            _ => 0.0,
        }
    }

    #[inline]
    fn from_f64(value: f64) -> f32 {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_repr<R: Repr>(repr: R) -> f32 {
        repr.to_f32()
    }

    #[inline]
    fn to_repr<R: Repr>(self) -> R {
        R::from_f32(self)
    }
}

impl Float for f64 {
    const BYTES: usize = 8;

    fn pow2(exponent: i32) -> f64 {
        match exponent {
            1024.. => f64::INFINITY,
            -1022..=1023 => f64::from_bits(((exponent + 1023) as u64) << 52),
            -1074..=-1023 => f64::from_bits(1u64 << (exponent + 1074)),
            _ => 0.0,
        }
    }

    #[inline]
    fn from_f64(value: f64) -> f64 {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_repr<R: Repr>(repr: R) -> f64 {
        repr.to_f64()
    }

    #[inline]
    fn to_repr<R: Repr>(self) -> R {
        R::from_f64(self)
    }
}

/// Number of bits in `T`, including any sign bit.
pub const fn num_bits<T: Integer>() -> u32 {
    T::BITS
}

// ---------- type-level tables ----------

pub struct IntSize<const BYTES: usize, const SIGNED: bool>;

pub trait BuiltinInt {
    type Type: Repr;
}

/// Built-in integer with the given byte size and signedness.
pub type MakeInt<const BYTES: usize, const SIGNED: bool> = <IntSize<BYTES, SIGNED> as BuiltinInt>::Type;

macro_rules! builtin_int {
    ($($bytes:literal, $signed:literal => $t:ty;)*) => {$(
        impl BuiltinInt for IntSize<$bytes, $signed> {
            type Type = $t;
        }
    )*};
}

builtin_int! {
    1, true => i8;
    1, false => u8;
    2, true => i16;
    2, false => u16;
    4, true => i32;
    4, false => u32;
    8, true => i64;
    8, false => u64;
    16, true => i128;
    16, false => u128;
}

pub struct FloatSize<const BYTES: usize>;

pub trait BuiltinFloat {
    type Type: Float;
}

/// Built-in float with at least the given byte size, capped at `f64`.
pub type MakeFloat<const BYTES: usize> = <FloatSize<BYTES> as BuiltinFloat>::Type;

impl BuiltinFloat for FloatSize<1> {
    type Type = f32;
}

impl BuiltinFloat for FloatSize<2> {
    type Type = f32;
}

impl BuiltinFloat for FloatSize<4> {
    type Type = f32;
}

impl BuiltinFloat for FloatSize<8> {
    type Type = f64;
}

impl BuiltinFloat for FloatSize<16> {
    type Type = f64;
}

pub trait Widen: Repr {
    type Next: Repr;
}

pub trait Narrow: Repr {
    type Previous: Repr;
}

/// Same signedness, twice the width.
pub type NextSize<T> = <T as Widen>::Next;
/// Same signedness, half the width.
pub type PreviousSize<T> = <T as Narrow>::Previous;

macro_rules! size_steps {
    ($($narrow:ty => $wide:ty;)*) => {$(
        impl Widen for $narrow {
            type Next = $wide;
        }

        impl Narrow for $wide {
            type Previous = $narrow;
        }
    )*};
}

size_steps! {
    i8 => i16;
    u8 => u16;
    i16 => i32;
    u16 => u32;
    i32 => i64;
    u32 => u64;
    i64 => i128;
    u64 => u128;
}

/// Representation able to hold values of both `Self` and `Rhs`.
pub trait CommonReprWith<Rhs: Repr>: Repr {
    type Output: Repr;
}

pub type CommonRepr<A, B> = <A as CommonReprWith<B>>::Output;

macro_rules! common_repr {
    ($($lhs:ty: [$($rhs:ty => $out:ty),*];)*) => {$($(
        impl CommonReprWith<$rhs> for $lhs {
            type Output = $out;
        }
    )*)*};
}

common_repr! {
    i8: [i8 => i8, u8 => i8, i16 => i16, u16 => i16, i32 => i32, u32 => i32, i64 => i64, u64 => i64, i128 => i128, u128 => i128];
    u8: [i8 => i8, u8 => u8, i16 => i16, u16 => u16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, i128 => i128, u128 => u128];
    i16: [i8 => i16, u8 => i16, i16 => i16, u16 => i16, i32 => i32, u32 => i32, i64 => i64, u64 => i64, i128 => i128, u128 => i128];
    u16: [i8 => i16, u8 => u16, i16 => i16, u16 => u16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, i128 => i128, u128 => u128];
    i32: [i8 => i32, u8 => i32, i16 => i32, u16 => i32, i32 => i32, u32 => i32, i64 => i64, u64 => i64, i128 => i128, u128 => i128];
    u32: [i8 => i32, u8 => u32, i16 => i32, u16 => u32, i32 => i32, u32 => u32, i64 => i64, u64 => u64, i128 => i128, u128 => u128];
    i64: [i8 => i64, u8 => i64, i16 => i64, u16 => i64, i32 => i64, u32 => i64, i64 => i64, u64 => i64, i128 => i128, u128 => i128];
    u64: [i8 => i64, u8 => u64, i16 => i64, u16 => u64, i32 => i64, u32 => u64, i64 => i64, u64 => u64, i128 => i128, u128 => u128];
    i128: [i8 => i128, u8 => i128, i16 => i128, u16 => i128, i32 => i128, u32 => i128, i64 => i128, u64 => i128, i128 => i128, u128 => i128];
    u128: [i8 => i128, u8 => u128, i16 => i128, u16 => u128, i32 => i128, u32 => u128, i64 => i128, u64 => u128, i128 => i128, u128 => u128];
}

pub trait CommonFloatWith<Rhs> {
    type Output: Float;
}

pub type CommonFloat<A, B> = <A as CommonFloatWith<B>>::Output;

impl CommonFloatWith<f32> for f32 {
    type Output = f32;
}

impl CommonFloatWith<f64> for f32 {
    type Output = f64;
}

impl CommonFloatWith<f32> for f64 {
    type Output = f64;
}

impl CommonFloatWith<f64> for f64 {
    type Output = f64;
}

// ---------- size arithmetic ----------

/// Number of bits needed to represent `value`.
pub const fn capacity(value: u64) -> u32 {
    u64::BITS - value.leading_zeros()
}

pub const fn make_int(bytes: usize, signed: bool) -> IntFormat {
    match bytes {
        1 | 2 | 4 | 8 | 16 => IntFormat::new(bytes as u32 * 8, signed),
        _ => panic!("no built-in integer of the requested size"),
    }
}

/// Byte size of the float chosen for `bytes` bytes of integer.
pub const fn make_float(bytes: usize) -> usize {
    match bytes {
        1 | 2 | 4 => 4,
        8 | 16 => 8,
        _ => panic!("no built-in float of the requested size"),
    }
}

pub const fn next_size(format: IntFormat) -> IntFormat {
    assert!(format.bits < 128, "no built-in integer wider than 128 bits");
    IntFormat::new(format.bits * 2, format.signed)
}

pub const fn previous_size(format: IntFormat) -> IntFormat {
    assert!(format.bits > 8, "no built-in integer narrower than 8 bits");
    IntFormat::new(format.bits / 2, format.signed)
}

/// Smallest power-of-two-sized integer holding `bits` bits.
///
/// Sizes up to 256 bits are accepted so that division intermediates can be
/// described; only up to 128 bits name a built-in type.
pub const fn sufficient_repr(bits: i32, signed: bool) -> IntFormat {
    assert!(bits >= 0, "negative bit count");
    let bytes = (bits as u64 + 7) / 8;
    let bytes = if bytes == 0 { 1 } else { 1u64 << capacity(bytes - 1) };
    assert!(bytes <= 32, "no integer representation wider than 256 bits");
    IntFormat::new(bytes as u32 * 8, signed)
}

pub const fn common_repr_type(lhs: IntFormat, rhs: IntFormat) -> IntFormat {
    let bits = if lhs.bits > rhs.bits { lhs.bits } else { rhs.bits };
    IntFormat::new(bits, lhs.signed || rhs.signed)
}

/// [`common_repr_type`] over any number of representations.
pub const fn common_repr_types(formats: &[IntFormat]) -> IntFormat {
    assert!(!formats.is_empty(), "no representations to combine");
    let mut common = formats[0];
    let mut i = 1;
    while i < formats.len() {
        common = common_repr_type(common, formats[i]);
        i += 1;
    }
    common
}
