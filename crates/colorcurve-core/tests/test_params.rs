mod common;

use colorcurve_core::error::CurveError;
use colorcurve_core::jitter::NonLinearColorJitter;
use colorcurve_core::params::{normalize, BoundSpec, CurveParam, SampleRange};

use common::seeded_rng;

fn uniform(low: f64, high: f64) -> SampleRange {
    SampleRange::Uniform { low, high }
}

// ---------------------------------------------------------------------------
// Scalar bounds
// ---------------------------------------------------------------------------

#[test]
fn test_scalar_white_point_centered_on_one() {
    let r = normalize(BoundSpec::Scalar(0.1), CurveParam::WhitePoint).unwrap();
    assert_eq!(r, uniform(0.9, 1.1));
}

#[test]
fn test_scalar_black_point_centered_on_zero_not_clipped() {
    let r = normalize(BoundSpec::Scalar(0.1), CurveParam::BlackPoint).unwrap();
    assert_eq!(r, uniform(-0.1, 0.1));
}

#[test]
fn test_scalar_slope_clipped_at_zero() {
    let r = normalize(BoundSpec::Scalar(1.5), CurveParam::Slope).unwrap();
    assert_eq!(r, uniform(0.0, 2.5));
}

#[test]
fn test_scalar_negative_rejected() {
    let err = normalize(BoundSpec::Scalar(-0.5), CurveParam::WhitePoint).unwrap_err();
    match err {
        CurveError::InvalidConfiguration { name, .. } => assert_eq!(name, "white_point"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_scalar_nan_rejected() {
    assert!(normalize(BoundSpec::Scalar(f64::NAN), CurveParam::Slope).is_err());
}

#[test]
fn test_scalar_too_wide_rejected() {
    let err = normalize(BoundSpec::Scalar(f64::MAX), CurveParam::BlackPoint).unwrap_err();
    match err {
        CurveError::InvalidConfiguration { name, .. } => assert_eq!(name, "black_point"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(normalize(BoundSpec::Scalar(f64::MAX), CurveParam::WhitePoint).is_err());
}

#[test]
fn test_huge_black_point_rejected_at_construction() {
    assert!(NonLinearColorJitter::new(0.1, f64::MAX, 0.5).is_err());
}

#[test]
fn test_large_but_sampleable_scalar() {
    let r = normalize(BoundSpec::Scalar(1e300), CurveParam::BlackPoint).unwrap();
    let v = r.sample(&mut seeded_rng(0)).unwrap();
    assert!(r.contains(v, 0.0));
}

#[test]
fn test_scalar_zero_is_fixed_at_center() {
    assert_eq!(
        normalize(BoundSpec::Scalar(0.0), CurveParam::WhitePoint).unwrap(),
        SampleRange::Fixed(1.0)
    );
    assert_eq!(
        normalize(BoundSpec::Scalar(0.0), CurveParam::BlackPoint).unwrap(),
        SampleRange::Fixed(0.0)
    );
    assert_eq!(
        normalize(BoundSpec::Scalar(0.0), CurveParam::Slope).unwrap(),
        SampleRange::Fixed(1.0)
    );
}

// ---------------------------------------------------------------------------
// Pair bounds
// ---------------------------------------------------------------------------

#[test]
fn test_pair_accepted_as_is() {
    let r = normalize(BoundSpec::Pair([0.5, 2.0]), CurveParam::Slope).unwrap();
    assert_eq!(r, uniform(0.5, 2.0));
}

#[test]
fn test_pair_low_above_high_rejected() {
    let err = normalize(BoundSpec::Pair([0.5, 0.2]), CurveParam::BlackPoint).unwrap_err();
    assert!(matches!(err, CurveError::InvalidConfiguration { .. }));
}

#[test]
fn test_pair_black_point_outside_bound_rejected() {
    assert!(normalize(BoundSpec::Pair([-1.5, 0.0]), CurveParam::BlackPoint).is_err());
    assert!(normalize(BoundSpec::Pair([0.0, 1.2]), CurveParam::BlackPoint).is_err());
}

#[test]
fn test_pair_white_point_negative_rejected() {
    assert!(normalize(BoundSpec::Pair([-0.1, 1.0]), CurveParam::WhitePoint).is_err());
}

#[test]
fn test_pair_infinite_rejected() {
    assert!(normalize(BoundSpec::Pair([0.5, f64::INFINITY]), CurveParam::Slope).is_err());
}

#[test]
fn test_pair_on_center_is_fixed() {
    assert_eq!(
        normalize(BoundSpec::Pair([1.0, 1.0]), CurveParam::Slope).unwrap(),
        SampleRange::Fixed(1.0)
    );
    assert_eq!(
        normalize(BoundSpec::Pair([0.0, 0.0]), CurveParam::BlackPoint).unwrap(),
        SampleRange::Fixed(0.0)
    );
}

// ---------------------------------------------------------------------------
// SampleRange
// ---------------------------------------------------------------------------

#[test]
fn test_fixed_range_never_varies() {
    let mut rng = rand::rngs::mock::StepRng::new(0, 1 << 40);
    let r = SampleRange::Fixed(0.3);
    for _ in 0..10 {
        assert_eq!(r.sample(&mut rng).unwrap(), 0.3);
    }
}

#[test]
fn test_uniform_samples_stay_in_range() {
    let mut rng = seeded_rng(12);
    let r = uniform(-0.2, 0.4);
    for _ in 0..1000 {
        let v = r.sample(&mut rng).unwrap();
        assert!((-0.2..=0.4).contains(&v), "sample {v} out of range");
    }
}

#[test]
fn test_inverted_or_nan_range_fails_to_sample() {
    let mut rng = seeded_rng(0);
    assert!(matches!(
        uniform(0.2, 0.1).sample(&mut rng),
        Err(CurveError::InvalidConfiguration { .. })
    ));
    assert!(uniform(f64::NAN, 0.1).sample(&mut rng).is_err());
    assert!(SampleRange::Fixed(f64::INFINITY).sample(&mut rng).is_err());
}

#[test]
fn test_range_display() {
    assert_eq!(uniform(0.5, 1.5).to_string(), "(0.5, 1.5)");
    assert_eq!(SampleRange::Fixed(1.0).to_string(), "fixed(1)");
}

#[test]
fn test_bound_spec_from_conversions() {
    assert_eq!(BoundSpec::from(0.2), BoundSpec::Scalar(0.2));
    assert_eq!(BoundSpec::from((0.1, 0.3)), BoundSpec::Pair([0.1, 0.3]));
}
