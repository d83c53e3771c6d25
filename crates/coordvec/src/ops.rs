//! Vector operations
//!
//! These traits are implemented for every [VectorExpression](crate::VectorExpression)
//! and return lazy expression nodes.
//! Call [value()](crate::ScalarExpression::value) on scalar results,
//! or [eval()](crate::VectorExpression::eval) on vector results, to compute them.

/// The squared length of a vector
///
/// In Cartesian coordinates this is the sum of the squared components.
/// In coordinate systems with a radial component it is the squared radius,
/// independent of the angles.
///
/// This avoids the square root taken by [Magnitude].
pub trait MagnitudeSquared {
    type Output;
    fn magnitude_squared(self) -> Self::Output;
}

/// The length of a vector
///
/// ```
/// use coordvec::prelude::*;
///
/// let v = Vector::<f64, 2>::new([3., 4.]);
/// assert_eq!(v.magnitude().value(), 5.);
///
/// // The radius alone is the length of a polar vector
/// let p = Vector::<f64, 2, Polar>::new([-2., 1.]);
/// assert_eq!(p.magnitude().value(), 2.);
/// ```
pub trait Magnitude {
    type Output;
    fn magnitude(self) -> Self::Output;
}

/// The unit vector pointing the same way
///
/// In polar and spherical coordinates, the radius becomes exactly 1
/// and the angles are corrected when the radius was negative,
/// so that the result still points the same way as the input.
///
/// ```
/// use coordvec::prelude::*;
/// use core::f64::consts::PI;
///
/// let p = Vector::<f64, 2, Polar>::new([-1., 0.]);
/// let unit: Vector<f64, 2, Polar> = p.normalized().eval();
/// assert_eq!(unit.rho(), 1.);
/// assert_eq!(unit.phi(), PI);
/// ```
pub trait Normalized {
    type Output;
    fn normalized(self) -> Self::Output;
}

/// The dot product A • B, summed component by component
pub trait Dot<T> {
    type Output;
    fn dot(self, r: T) -> Self::Output;
}
