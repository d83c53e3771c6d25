//! A user-supplied scalar type, the only option without the `std` feature.
//! These tests also run under `--no-default-features`.

use coordvec::prelude::*;
use coordvec::scalar::{Abs, Rational, Ring, Sqrt, Trig};
use coordvec::Real;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A scalar that only implements what `Real` asks for
#[derive(Clone, Copy, Default, Debug, PartialEq, PartialOrd)]
struct Meters(f64);

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl Neg for Meters {
    type Output = Meters;
    fn neg(self) -> Meters {
        Meters(-self.0)
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, r: Meters) -> Meters {
        Meters(self.0 + r.0)
    }
}

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, r: Meters) -> Meters {
        Meters(self.0 - r.0)
    }
}

impl Mul for Meters {
    type Output = Meters;
    fn mul(self, r: Meters) -> Meters {
        Meters(self.0 * r.0)
    }
}

impl Div for Meters {
    type Output = Meters;
    fn div(self, r: Meters) -> Meters {
        Meters(self.0 / r.0)
    }
}

impl Rem for Meters {
    type Output = Meters;
    fn rem(self, r: Meters) -> Meters {
        Meters(self.0 % r.0)
    }
}

impl Abs for Meters {
    type Output = Meters;
    fn abs(self) -> Meters {
        Meters(self.0.abs())
    }
}

impl Ring for Meters {
    fn from_integer(i: isize) -> Meters {
        Meters(i as f64)
    }
}

impl Rational for Meters {
    fn from_fraction(numerator: isize, denominator: isize) -> Meters {
        Meters(numerator as f64 / denominator as f64)
    }
}

impl Sqrt for Meters {
    type Output = Meters;
    fn sqrt(self) -> Meters {
        Meters(self.0.sqrt())
    }
}

impl Trig for Meters {
    type Output = Meters;
    fn cos(self) -> Meters {
        Meters(self.0.cos())
    }
    fn sin(self) -> Meters {
        Meters(self.0.sin())
    }
    fn atan2(self, x: Meters) -> Meters {
        Meters(self.0.atan2(x.0))
    }
}

impl Real for Meters {
    fn pi() -> Meters {
        Meters(core::f64::consts::PI)
    }
    fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

#[test]
fn test_cartesian_arithmetic() {
    let a = Vector::<Meters, 2>::new([Meters(3.), Meters(0.)]);
    let b = Vector::<Meters, 2>::new([Meters(0.), Meters(4.)]);
    assert_eq!((&a + &b).magnitude().value(), Meters(5.));
    assert_eq!(a.dot(&b).value(), Meters(0.));

    let scaled: Vector<Meters, 2> = (&b * Meters(0.5)).eval();
    assert_eq!(scaled.y(), Meters(2.));
}

fn assert_close(actual: Meters, expected: f64) {
    assert!(
        (actual.0 - expected).abs() < 1e-12,
        "{} is not close to {}",
        actual,
        expected
    );
}

#[test]
fn test_polar_policies_and_conversion() {
    use core::f64::consts::{FRAC_PI_2, PI};

    let p = Vector::<Meters, 2, Polar>::new([Meters(-2.), Meters(-FRAC_PI_2)]);
    assert_close(p.phi(), 3. * FRAC_PI_2);
    assert_eq!(p.magnitude().value(), Meters(2.));

    // A negative radius flips the angle by half a turn
    let unit: Vector<Meters, 2, Polar> = p.normalized().eval();
    assert_eq!(unit.rho(), Meters(1.));
    assert_close(unit.phi(), FRAC_PI_2);

    let c: Vector<Meters, 2> = unit.convert();
    assert_close(c.x(), 0.);
    assert_close(c.y(), 1.);
    assert_close(Meters::two_pi(), 2. * PI);
}

#[test]
fn test_checked_normalize() {
    let zero = Vector::<Meters, 3>::default();
    assert_eq!(zero.try_normalized(), Err(coordvec::Error::DegenerateVector));
}
