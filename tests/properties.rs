use binary_fixed::{
    demote, divide, promote, promote_multiply, shift_right, sqrt, trunc_multiply,
    trunc_multiply_result, FixedPoint, Q64x64, Q8x8, SQ15x16, SQ3x4, SQ63x64, SQ7x8,
};
use proptest::prelude::*;

// Property 1: integer conversion is exact inside the integer range
proptest! {
    #[test]
    fn prop_integer_roundtrip(value in -32768i32..32768) {
        let x = SQ15x16::from_int(value);
        prop_assert_eq!(x.to_int::<i32>(), value);
        prop_assert_eq!(SQ15x16::from_data(x.data()), x);
    }
}

// Property 2: float conversion loses less than one step of resolution
proptest! {
    #[test]
    fn prop_float_roundtrip(value in -30000.0f64..30000.0f64) {
        let x = SQ15x16::from_float(value);
        let diff = (x.to_float::<f64>() - value).abs();
        prop_assert!(diff < 1.0 / 65536.0, "{} -> {} (diff: {})", value, x, diff);
    }
}

// Property 3: the widened product is exact
proptest! {
    #[test]
    fn prop_promoted_product_is_exact(a in any::<i16>(), b in any::<i16>()) {
        let product: SQ15x16 = promote_multiply(SQ7x8::from_data(a), SQ7x8::from_data(b));
        prop_assert_eq!(product.data(), a as i32 * b as i32);
    }
}

// Property 4: demoting a promoted value gives it back
proptest! {
    #[test]
    fn prop_demote_undoes_promote(raw in any::<i16>()) {
        let x = SQ7x8::from_data(raw);
        let wide: SQ15x16 = promote(x);
        let back: SQ7x8 = demote(wide);
        prop_assert_eq!(back, x);
    }
}

// Property 5: sqrt is the truncated root at the operand's resolution
proptest! {
    #[test]
    fn prop_sqrt_brackets_the_root(raw in 0i32..=i32::MAX) {
        let root = sqrt(SQ15x16::from_data(raw)).data() as u128;
        let scaled = (raw as u128) << 16;
        prop_assert!(root * root <= scaled);
        prop_assert!((root + 1) * (root + 1) > scaled);
    }
}

// Property 6: heterogeneous comparison is symmetric and matches the real values
proptest! {
    #[test]
    fn prop_comparison_symmetric(a in any::<i8>(), b in any::<u16>()) {
        let a = SQ3x4::from_data(a);
        let b = Q8x8::from_data(b);

        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a < b, b > a);
        prop_assert_eq!(a.partial_cmp(&b), b.partial_cmp(&a).map(|o| o.reverse()));
        prop_assert_eq!(a.partial_cmp(&b), a.to_float::<f64>().partial_cmp(&b.to_float::<f64>()));
    }
}

// Property 7: same-type division truncates toward zero
proptest! {
    #[test]
    fn prop_division_truncates(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(b != 0);
        let exact = ((a as i64) << 16) / b as i64;
        prop_assume!(exact >= i32::MIN as i64 && exact <= i32::MAX as i64);

        let q = SQ15x16::from_data(a) / SQ15x16::from_data(b);
        prop_assert_eq!(q.data() as i64, exact);
    }
}

// Property 8: an unsigned 128-bit dividend keeps every bit through the wide tier
proptest! {
    #[test]
    fn prop_wide_unsigned_by_positive_int(raw in any::<u128>(), d in 1i32..=i32::MAX) {
        let q = Q64x64::from_data(raw) / d;
        prop_assert_eq!(q.data(), raw / d as u128);
    }

    #[test]
    fn prop_wide_unsigned_by_signed_int(raw in 0u128..(1u128 << 127), d in any::<i32>()) {
        prop_assume!(d != 0);
        let q: SQ63x64 = divide(Q64x64::from_data(raw), FixedPoint::<i32, 0>::from_int(d));

        // the quotient lands on the dividend's exponent, rounded toward -inf
        let a = raw as i128;
        let d = d as i128;
        let exact = if a % d != 0 && d < 0 { a / d - 1 } else { a / d };
        prop_assert_eq!(q.data(), exact);
    }

    #[test]
    fn prop_wide_unsigned_by_signed_fixed(
        raw in 0u128..(1u128 << 64),
        magnitude in (1u128 << 64)..(1u128 << 127),
        negative in any::<bool>(),
    ) {
        let b = if negative { -(magnitude as i128) } else { magnitude as i128 };
        let q: SQ63x64 = divide(Q64x64::from_data(raw), SQ63x64::from_data(b));

        // 2^-63 resolution from the intermediate, then one step up to 2^-64
        let exact = (((raw as i128) << 63) / b) << 1;
        prop_assert_eq!(q.data(), exact);
    }
}

// Property 9: a product whose integer part fits both operands' digits never wraps
proptest! {
    #[test]
    fn prop_trunc_multiply_never_wraps(a in any::<i16>(), b in any::<i16>()) {
        prop_assume!(!(a == i16::MIN && b == i16::MIN));
        let product: trunc_multiply_result!(SQ7x8) =
            trunc_multiply(SQ7x8::from_data(a), SQ7x8::from_data(b));

        prop_assert_eq!(<trunc_multiply_result!(SQ7x8)>::EXPONENT, -1);
        prop_assert_eq!(product.data() as i32, (a as i32 * b as i32) >> 15);
    }
}

// Property 10: right shifts floor
proptest! {
    #[test]
    fn prop_shift_right_floors(value in any::<i64>(), amount in 0i32..63) {
        let shifted = shift_right::<i64, i64>(value, amount);
        prop_assert_eq!(shifted, value.div_euclid(1i64 << amount));
    }
}

// Property 11: decimal output parses back to the same value
proptest! {
    #[test]
    fn prop_display_parse_roundtrip(raw in any::<i32>()) {
        let x = SQ15x16::from_data(raw);
        prop_assert_eq!(x.to_string().parse::<SQ15x16>(), Ok(x));

        let y = FixedPoint::<u64, -40>::from_data(raw as u32 as u64);
        prop_assert_eq!(y.to_string().parse::<FixedPoint<u64, -40>>(), Ok(y));
    }
}

#[cfg(feature = "serde")]
proptest! {
    #[test]
    fn prop_serde_roundtrip(raw in any::<i32>()) {
        let x = SQ15x16::from_data(raw);
        let json = serde_json::to_string(&x).unwrap();
        prop_assert_eq!(serde_json::from_str::<SQ15x16>(&json).unwrap(), x);
    }
}
