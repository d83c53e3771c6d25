//! Per-component value policies
//!
//! Angular components only make sense within a fixed domain:
//! an azimuth wraps around after a full turn,
//! while an inclination saturates at the poles.
//! Every coordinate system lists one [ValuePolicy] per component,
//! and every write into a [Vector](crate::Vector) passes through it,
//! so stored values are always normalized.
//!
//! Non-finite values (NaN, ±∞) are stored unchanged by every policy.
//! Use [Vector::is_finite](crate::Vector::is_finite) to detect them.

use crate::scalar::*;

/// The normalization applied to a single vector component whenever it is written
///
/// ```
/// use coordvec::ValuePolicy;
/// use core::f64::consts::{FRAC_PI_2, PI};
///
/// assert_eq!(ValuePolicy::ZeroToTwoPi.apply(-FRAC_PI_2), 3. * FRAC_PI_2);
/// assert_eq!(ValuePolicy::MinusPlusHalfPi.apply(2. * PI), FRAC_PI_2);
/// assert_eq!(ValuePolicy::NoChange.apply(-7.), -7.);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub enum ValuePolicy {
    /// Store the value as given
    #[default]
    NoChange,
    /// Wrap an angle into `[0, 2π)`
    ZeroToTwoPi,
    /// Clamp an angle into `[-π/2, π/2]`
    MinusPlusHalfPi,
}

impl ValuePolicy {
    /// Normalize a value into this policy's domain.
    ///
    /// Applying a policy is idempotent.
    pub fn apply<T: Real>(self, value: T) -> T {
        match self {
            ValuePolicy::NoChange => value,
            ValuePolicy::ZeroToTwoPi => zero_to_two_pi(value),
            ValuePolicy::MinusPlusHalfPi => clamp_minus_plus_half_pi(value),
        }
    }
}

/// Wrap an angle into `[0, 2π)`. Negative angles wrap forward, so -π/2 becomes 3π/2.
pub fn zero_to_two_pi<T: Real>(value: T) -> T {
    if !value.is_finite() {
        return value;
    }
    let two_pi = T::two_pi();
    let mut wrapped = value % two_pi;
    if wrapped < T::zero() {
        wrapped = wrapped + two_pi;
    }
    // Tiny negative inputs round up to exactly 2π
    if wrapped >= two_pi {
        T::zero()
    } else {
        wrapped
    }
}

/// Clamp an angle into `[-π/2, π/2]`. Out-of-range angles saturate at the nearest bound.
pub fn clamp_minus_plus_half_pi<T: Real>(value: T) -> T {
    if !value.is_finite() {
        return value;
    }
    let half_pi = T::half_pi();
    if value < -half_pi {
        -half_pi
    } else if value > half_pi {
        half_pi
    } else {
        value
    }
}
