use derived_sha::primitives::U512;

fn limbs(value: U512) -> [u64; 8] {
    value.into()
}

fn all_ones() -> U512 {
    U512::from([u64::MAX; 8])
}

#[test]
fn u512_consts() {
    assert_eq!(limbs(U512::ZERO), [0; 8]);
    assert_eq!(limbs(U512::ONE), [0, 0, 0, 0, 0, 0, 0, 1]);
    assert_eq!(U512::ZERO - U512::ONE, all_ones());
}

#[test]
fn u512_from_native_ints() {
    assert_eq!(U512::from(7u32), U512::from(7u64));
    assert_eq!(U512::from(7u64), U512::from(7u128));

    let wide = U512::from(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128);
    assert_eq!(
        limbs(wide),
        [0, 0, 0, 0, 0, 0, 0x0123_4567_89AB_CDEF, 0xFEDC_BA98_7654_3210]
    );
}

#[test]
fn u512_low_u128() {
    let value = 0xDEAD_BEEF_0000_0000_1234_5678_9ABC_DEF0u128;
    assert_eq!(U512::from(value).low_u128(), value);

    let above = U512::from([0, 0, 0, 0, 0, 1, 0, 0]);
    assert_eq!(above.low_u128(), 0);
}

#[test]
fn u512_leading_zeros() {
    assert_eq!(U512::ZERO.leading_zeros(), 512);
    assert_eq!(U512::ONE.leading_zeros(), 511);
    assert_eq!(all_ones().leading_zeros(), 0);
    assert_eq!(U512::from(1u128 << 100).leading_zeros(), 411);
}

#[test]
fn u512_shifts_byte_aligned() {
    let shifted = U512::ONE << 8;
    assert_eq!(shifted, U512::from(0x100u64));
    assert_eq!(shifted >> 8, U512::ONE);
}

#[test]
fn u512_shifts_bit_aligned() {
    assert_eq!(U512::from(0x81u64) << 1, U512::from(0x102u64));
    assert_eq!(U512::from(0x102u64) >> 1, U512::from(0x81u64));

    // crosses a limb boundary
    let top = U512::from(1u64 << 63);
    assert_eq!(limbs(top << 1), [0, 0, 0, 0, 0, 0, 1, 0]);
    assert_eq!((top << 1) >> 1, top);

    assert_eq!(limbs(U512::ONE << 511), [1 << 63, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!((U512::ONE << 511) >> 511, U512::ONE);
}

#[test]
fn u512_shift_out_of_range_returns_zero() {
    assert_eq!(all_ones() << 512, U512::ZERO);
    assert_eq!(all_ones() >> 512, U512::ZERO);
    assert_eq!(all_ones() << 1000, U512::ZERO);
    assert_eq!(all_ones() << 0, all_ones());
}

#[test]
fn u512_add_and_sub_carry_borrow() {
    let low = U512::from(u64::MAX);
    let sum = low + U512::ONE;

    assert_eq!(limbs(sum), [0, 0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(sum - U512::ONE, low);

    // wrapping at both ends
    assert_eq!(all_ones() + U512::ONE, U512::ZERO);
    assert_eq!(U512::ZERO - U512::ONE, all_ones());
}

#[test]
fn u512_abs_diff() {
    let a = U512::from(10u64);
    let b = U512::from(3u64);

    assert_eq!(a.abs_diff(b), U512::from(7u64));
    assert_eq!(b.abs_diff(a), U512::from(7u64));
    assert_eq!(a.abs_diff(a), U512::ZERO);
}

#[test]
fn u512_mul_basic_and_overflow_truncates() {
    assert_eq!(U512::from(2u64) * U512::from(3u64), U512::from(6u64));

    let m = u64::MAX as u128;
    assert_eq!(U512::from(u64::MAX) * U512::from(u64::MAX), U512::from(m * m));

    // (2^512 - 1) * 2 wraps to 2^512 - 2
    assert_eq!(all_ones() * U512::from(2u64), all_ones() - U512::ONE);

    // (2^512 - 1)^2 wraps to 1, which needs every carry
    assert_eq!(all_ones() * all_ones(), U512::ONE);

    let half = U512::ONE << 256;
    assert_eq!(half * half, U512::ZERO);
}

#[test]
fn u512_div_basic_cases() {
    let three = U512::from(3u64);

    assert_eq!(U512::from(9u64) / three, three);
    assert_eq!(U512::from(10u64) / three, three);
    assert_eq!(U512::from(5u64) / U512::from(10u64), U512::ZERO);

    let n = 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128;
    let d = 0x1_0000_0001u64;
    assert_eq!(U512::from(n) / U512::from(d), U512::from(n / d as u128));
}

#[test]
fn u512_div_by_one_identity() {
    assert_eq!(all_ones() / U512::ONE, all_ones());
    assert_eq!(all_ones() / all_ones(), U512::ONE);
}

#[test]
fn u512_div_inverts_mul() {
    let a = U512::from(0xFFFF_0000_FFFF_0000_1111_2222_3333_4444u128) << 200;
    let b = U512::from(0x1234_5678_9ABCu64);

    assert_eq!((a * b) / b, a);
}

#[test]
#[should_panic]
fn u512_div_by_zero_panics() {
    let _ = U512::ONE / U512::ZERO;
}

#[test]
fn u512_ordering_is_numeric() {
    assert!(U512::from(1u64 << 63) < (U512::ONE << 64));
    assert!(U512::ZERO < U512::ONE);
    assert!(all_ones() > U512::ONE << 511);
}
