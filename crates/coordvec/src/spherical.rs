//! Spherical coordinates in 3D space

use crate::components::{component_out_of_range, Cartesian, CoordinateSystem};
use crate::convert::CartesianForm;
use crate::expr::VectorExpression;
use crate::policy::zero_to_two_pi;
use crate::scalar::*;
use coordvec_macros::coordinate_system;

coordinate_system! {
    /// Spherical coordinates: a radius and two angles
    ///
    /// The inclination is the elevation above the XY plane,
    /// so `phi = π/2` points along +Z and `phi = 0` lies in the plane.
    /// The azimuth is measured in the XY plane from +X towards +Y.
    ///
    /// As with [Polar](crate::Polar), only the radius carries scale
    /// and the magnitude is `|rho|`.
    pub struct Spherical[3] {
        /// Radial distance from the origin
        rho | r: NoChange,
        /// Elevation above the XY plane, in `[-π/2, π/2]`
        phi | inclination: MinusPlusHalfPi,
        /// Angle from the +X axis towards +Y, in `[0, 2π)`
        theta | azimuth: ZeroToTwoPi,
    }
}

impl CoordinateSystem for Spherical {
    fn scale<E>(expr: &E, index: usize, factor: E::Scalar) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        match index {
            Self::RHO => expr.component(index) * factor,
            _ => expr.component(index),
        }
    }

    fn divide<E>(expr: &E, index: usize, divisor: E::Scalar) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        match index {
            Self::RHO => expr.component(index) / divisor,
            _ => expr.component(index),
        }
    }

    fn magnitude_squared<E>(expr: &E) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let rho = expr.component(Self::RHO);
        rho * rho
    }

    fn magnitude<E>(expr: &E) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        expr.component(Self::RHO).abs()
    }

    fn normalized<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let mirrored = expr.component(Self::RHO) < <E::Scalar as Ring>::zero();
        match index {
            Self::RHO => <E::Scalar as Ring>::one(),
            // A negative radius reflects through the origin
            Self::PHI if mirrored => -expr.component(index),
            Self::THETA if mirrored => {
                zero_to_two_pi(expr.component(index) + <E::Scalar as Real>::pi())
            }
            _ => expr.component(index),
        }
    }
}

impl CartesianForm for Spherical {
    const CARTESIAN_SIZE: usize = 3;

    fn to_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let rho = expr.component(Self::RHO);
        let phi = expr.component(Self::PHI);
        let theta = expr.component(Self::THETA);
        match index {
            Cartesian::X => rho * phi.cos() * theta.cos(),
            Cartesian::Y => rho * phi.cos() * theta.sin(),
            Cartesian::Z => rho * phi.sin(),
            _ => component_out_of_range(index, 3),
        }
    }

    fn from_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Cartesian>,
    {
        let x = expr.component(Cartesian::X);
        let y = expr.component(Cartesian::Y);
        let z = expr.component(Cartesian::Z);
        match index {
            Self::RHO => (x * x + y * y + z * z).sqrt(),
            Self::PHI => z.atan2((x * x + y * y).sqrt()),
            Self::THETA => zero_to_two_pi(y.atan2(x)),
            _ => component_out_of_range(index, 3),
        }
    }
}
