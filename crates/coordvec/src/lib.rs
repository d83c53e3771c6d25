#![cfg_attr(not(feature = "std"), no_std)]

//! coordvec is a library of small fixed-size vectors in several coordinate systems.
//!
//! Every [Vector] is tagged at the type level with its coordinate system:
//! [Cartesian] (1 to 4 axes), [Polar] (2D), [Spherical] and [Cylindrical] (3D),
//! or any layout you [declare yourself](coordinate_system).
//! The coordinate system decides what arithmetic means.
//! Multiplying a polar vector by a scalar scales its radius and leaves its angle alone,
//! and its magnitude is simply the absolute value of the radius.
//!
//! Angular components carry a [value policy](ValuePolicy)
//! that is applied on every write, so azimuths always lie in `[0, 2π)`
//! and inclinations in `[-π/2, π/2]`.
//!
//! Arithmetic is lazy.
//! Operators and [operations](ops) build [expressions](expr) that are evaluated one component
//! at a time, only when asked, without materializing intermediate vectors or allocating.
//!
//! ```
//! use coordvec::prelude::*;
//! use core::f64::consts::FRAC_PI_2;
//!
//! let a = Vector::<f64, 2>::new([3., 0.]);
//! let b = Vector::<f64, 2>::new([0., 4.]);
//!
//! // Nothing is computed until `value()` is called
//! assert_eq!((&a + &b).magnitude().value(), 5.);
//!
//! // Convert to polar form
//! let p: Vector<f64, 2, Polar> = b.convert();
//! assert_eq!(p.rho(), 4.);
//! assert_eq!(p.phi(), FRAC_PI_2);
//!
//! // Decompose a vector relative to a direction
//! let v = &a + &b;
//! let (parallel, perpendicular) = project(&a, &v);
//! assert_eq!(parallel.eval::<2>(), a);
//! assert_eq!(perpendicular.eval::<2>(), b);
//! ```
//!
//! coordvec is generic over the [scalar] datatype.
//! `f32` and `f64` are supported out of the box.
//! coordvec is `no_std`-compatible;
//! without the `std` feature you must supply your own [Real] scalar,
//! since the trigonometric functions come from the standard library.
//!
//! Enable the `approx` feature for `approx` comparisons between vectors.

// Generated code refers to this crate by name
extern crate self as coordvec;

/// ```
/// use coordvec::prelude::*;
/// use coordvec::{coordinate_system, CoordinateSystem};
///
/// coordinate_system! {
///     /// Latitude and longitude on a unit sphere
///     pub struct LatLon[2] {
///         lat | latitude: MinusPlusHalfPi,
///         lon | longitude: ZeroToTwoPi,
///     }
/// }
///
/// // Component-wise arithmetic
/// impl CoordinateSystem for LatLon {}
///
/// let mut p = Vector::<f64, 2, LatLon>::new([2., -1.]);
/// assert_eq!(p.lat(), core::f64::consts::FRAC_PI_2); // clamped
/// p.set_longitude(7.);
/// assert!(p.lon() < 2. * core::f64::consts::PI); // wrapped
/// assert_eq!(LatLon::LON, 1);
/// ```
pub use coordvec_macros::coordinate_system;

pub mod components;
pub mod convert;
pub mod cylindrical;
pub mod error;
pub mod expr;
pub mod ops;
pub mod polar;
pub mod policy;
pub mod project;
pub mod scalar;
pub mod spherical;
pub mod vector;


pub use components::{Cartesian, CartesianAccess, CartesianAccessMut, Components, CoordinateSystem};
pub use convert::{CartesianForm, ConvertExpression, FromCartesian, ToCartesian};
pub use cylindrical::{Cylindrical, CylindricalAccess, CylindricalAccessMut};
pub use error::{Error, Result};
pub use expr::{
    DotProduct, ScalarDivide, ScalarExpression, ScalarMultiply, VectorDifference,
    VectorExpression, VectorMagnitude, VectorMagnitudeSquared, VectorNormalize, VectorSum,
};
pub use polar::{Polar, PolarAccess, PolarAccessMut};
pub use policy::ValuePolicy;
pub use project::{perpendicular, project, projection, try_perpendicular, try_project, try_projection};
pub use scalar::Real;
pub use spherical::{Spherical, SphericalAccess, SphericalAccessMut};
pub use vector::Vector;

/// Everything needed to work with vectors using method and operator syntax
///
/// ```
/// use coordvec::prelude::*;
/// ```
pub mod prelude {
    pub use crate::components::{Cartesian, CartesianAccess, CartesianAccessMut, Components};
    pub use crate::convert::ConvertExpression;
    pub use crate::cylindrical::{Cylindrical, CylindricalAccess, CylindricalAccessMut};
    pub use crate::expr::{ScalarExpression, VectorExpression};
    pub use crate::ops::*;
    pub use crate::polar::{Polar, PolarAccess, PolarAccessMut};
    pub use crate::policy::ValuePolicy;
    pub use crate::project::{perpendicular, project, projection};
    pub use crate::spherical::{Spherical, SphericalAccess, SphericalAccessMut};
    pub use crate::vector::Vector;
}
