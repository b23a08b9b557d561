//! Binary fixed-point arithmetic: `FixedPoint<R, E>` stores `R × 2^E`, and the
//! result type of every operation is computed from the operand types.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod macros;
pub mod width;
pub mod integers;
pub mod shift;
pub mod resolve;
pub mod fixed_point;
pub mod arith;
pub mod derived;

pub use arith::{add, common_add, common_div, common_mul, common_sub, divide, multiply, sqrt};
pub use derived::{
    demote, promote, promote_divide, promote_multiply, promote_square, trunc_add, trunc_divide,
    trunc_multiply, trunc_reciprocal, trunc_sqrt, trunc_square, trunc_subtract,
};
pub use error::ParseFixedError;
pub use fixed_point::{FixedPoint, Scaled, Q16x16, Q32x32, Q64x64, Q8x8, SQ15x16, SQ31x32, SQ3x4, SQ63x64, SQ7x8};
pub use integers::{I256, U256};
pub use resolve::{Format, Kind, Numeric};
pub use shift::{shift_left, shift_right};
pub use width::{Float, IntFormat, Integer, MakeFloat, MakeInt, Repr};
