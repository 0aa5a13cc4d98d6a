use dnum::*;

fn kind_of(value: f64) -> Kind {
    Context::unpooled().select(value).unwrap().kind()
}

#[test]
fn integral_boundaries() {
    assert_eq!(kind_of(0.0), Kind::Short);
    assert_eq!(kind_of(-0.0), Kind::Short);
    assert_eq!(kind_of(32767.0), Kind::Short);
    assert_eq!(kind_of(-32768.0), Kind::Short);

    assert_eq!(kind_of(32768.0), Kind::Int);
    assert_eq!(kind_of(-32769.0), Kind::Int);
    assert_eq!(kind_of(2147483647.0), Kind::Int);
    assert_eq!(kind_of(-2147483648.0), Kind::Int);

    assert_eq!(kind_of(2147483648.0), Kind::Float);
    assert_eq!(kind_of(-2147483649.0), Kind::Float);
    assert_eq!(kind_of(1e10), Kind::Float);
}

#[test]
fn fractional_values() {
    assert_eq!(kind_of(0.5), Kind::Float);
    assert_eq!(kind_of(-1.25), Kind::Float);
    assert_eq!(kind_of(32767.5), Kind::Float);
}

#[test]
fn float_magnitude_boundaries() {
    let max = f32::MAX as f64;
    assert_eq!(kind_of(max), Kind::Float);
    assert_eq!(kind_of(-max), Kind::Float);
    assert_eq!(kind_of(max * 2.0), Kind::Double);
    assert_eq!(kind_of(-max * 2.0), Kind::Double);
    assert_eq!(kind_of(1e300), Kind::Double);
    assert_eq!(kind_of(f64::MAX), Kind::Double);
    assert_eq!(kind_of(f64::MIN), Kind::Double);
}

#[test]
fn values_keep_their_magnitude() {
    let ctx = Context::unpooled();
    assert_eq!(ctx.select(-32768.0).unwrap().to_f64(), -32768.0);
    assert_eq!(ctx.select(2147483647.0).unwrap().to_f64(), 2147483647.0);
    assert_eq!(ctx.select(0.5).unwrap().to_f64(), 0.5);
    assert_eq!(ctx.select(1e300).unwrap().to_f64(), 1e300);
}

#[test]
fn float_narrowing_loses_precision() {
    let ctx = Context::unpooled();

    // 0.1 is within f32 magnitude, so it is stored as the nearest f32
    let v = ctx.select(0.1).unwrap();
    assert_eq!(v.kind(), Kind::Float);
    assert_ne!(v.to_f64(), 0.1);
    assert_eq!(v.to_f64(), 0.1f32 as f64);

    // integral but beyond i32 and beyond f32's 24-bit significand
    let v = ctx.select(2147483649.0).unwrap();
    assert_eq!(v.kind(), Kind::Float);
    assert_eq!(v.to_f64(), 2147483648.0);

    // tiny magnitudes are in range and narrow to zero
    let v = ctx.select(1e-310).unwrap();
    assert_eq!(v.kind(), Kind::Float);
    assert_eq!(v.to_f64(), 0.0);
}

#[test]
fn non_finite_overflows() {
    let ctx = Context::unpooled();
    assert_eq!(ctx.select(f64::INFINITY).unwrap_err(), Error::Overflow(f64::INFINITY));
    assert_eq!(
        ctx.select(f64::NEG_INFINITY).unwrap_err(),
        Error::Overflow(f64::NEG_INFINITY)
    );
    assert!(matches!(ctx.select(f64::NAN), Err(Error::Overflow(v)) if v.is_nan()));
}

#[test]
fn arithmetic_overflow() {
    let big = Number::new(f64::MAX).unwrap();
    assert_eq!(big.kind(), Kind::Double);
    assert_eq!((&big + &big).unwrap_err(), Error::Overflow(f64::INFINITY));
    assert_eq!((&big * &big).unwrap_err(), Error::Overflow(f64::INFINITY));
}

#[test]
fn integral_constructor() {
    let ctx = Context::unpooled();
    assert_eq!(ctx.integral(-32768).kind(), Kind::Short);
    assert_eq!(ctx.integral(32768).kind(), Kind::Int);
    assert_eq!(ctx.integral(i32::MIN).kind(), Kind::Int);
}

#[test]
fn variant_without_promotion() {
    let ctx = Context::unpooled();
    let v = ctx.variant(2.0f64);
    assert_eq!(v.kind(), Kind::Double);
    assert_eq!(v.size_in_bytes(), 8);
}
