#![cfg(feature = "std")]

use approx::assert_relative_eq;
use coordvec::prelude::*;
use coordvec::{coordinate_system, CoordinateSystem, Error};
use core::f64::consts::{FRAC_PI_2, PI, TAU};

coordinate_system! {
    /// A position on a globe, with an optional altitude
    pub struct Geodetic[2..=3] {
        lat | latitude: MinusPlusHalfPi,
        lon | longitude: ZeroToTwoPi,
        alt | altitude: NoChange,
    }
}

impl CoordinateSystem for Geodetic {}

type Surface = Vector<f64, 2, Geodetic>;
type Position = Vector<f64, 3, Geodetic>;

#[test]
fn test_layout_description() {
    assert_eq!(Geodetic::MIN_COMPONENTS, 2);
    assert_eq!(Geodetic::MAX_COMPONENTS, 3);
    assert_eq!(Geodetic::LAT, 0);
    assert_eq!(Geodetic::LONGITUDE, 1);
    assert_eq!(Geodetic::ALT, 2);
    assert_eq!(Geodetic::index_of("altitude"), Some(2));
    assert_eq!(Geodetic::index_of("height"), None);
    assert_eq!(Geodetic::value_policy(0), ValuePolicy::MinusPlusHalfPi);
    assert_eq!(Geodetic::value_policy(1), ValuePolicy::ZeroToTwoPi);
    assert_eq!(Geodetic::value_policy(2), ValuePolicy::NoChange);
}

#[test]
fn test_policies_apply() {
    let mut p = Position::new([PI, -FRAC_PI_2, -10.]);
    assert_eq!(p.latitude(), FRAC_PI_2);
    assert_relative_eq!(p.longitude(), 3. * FRAC_PI_2);
    assert_eq!(p.alt(), -10.);

    p.set_lon(TAU + 0.25);
    assert_relative_eq!(p.lon(), 0.25, epsilon = 1e-12);
    p.set_altitude(100.);
    assert_eq!(p.get_named("alt"), Ok(100.));
    assert_eq!(p.get_named("elevation"), Err(Error::UnknownComponent));

    let surface = Surface::new([-1., 1.]);
    assert_eq!(surface.lat(), -1.);
}

#[test]
fn test_cartesian_rules_by_default() {
    let p = Position::new([0.5, 1., 3.]);
    assert_relative_eq!(p.magnitude().value(), (0.25_f64 + 1. + 9.).sqrt());

    // Every component is scaled, then the policies apply to the result
    let scaled: Position = (&p * 4.).eval();
    assert_eq!(scaled.lat(), FRAC_PI_2);
    assert_eq!(scaled.lon(), 4.);
    assert_eq!(scaled.alt(), 12.);

    let sum: Position = (&p + &p).eval();
    assert_eq!(sum, Position::new([1., 2., 6.]));
}

#[test]
fn test_resize_within_layout() {
    let surface = Surface::new([0.25, 1.]);
    let position = Position::resized_from(&surface);
    assert_eq!(position, Position::new([0.25, 1., 0.]));
    let back: Surface = position.eval();
    assert_eq!(back, surface);
}
