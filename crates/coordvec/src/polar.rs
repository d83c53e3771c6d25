//! Polar coordinates in the plane

use crate::components::{component_out_of_range, Cartesian, CoordinateSystem};
use crate::convert::CartesianForm;
use crate::expr::VectorExpression;
use crate::policy::zero_to_two_pi;
use crate::scalar::*;
use coordvec_macros::coordinate_system;

coordinate_system! {
    /// Polar coordinates: a radius and an angle
    ///
    /// The radius alone carries scale.
    /// Multiplying or dividing by a scalar only changes `rho`,
    /// and the magnitude is `|rho|`.
    /// A negative radius points the opposite way from its angle.
    pub struct Polar[2] {
        /// Radial distance from the origin
        rho | r: NoChange,
        /// Angle from the +X axis towards +Y, in `[0, 2π)`
        phi | azimuth: ZeroToTwoPi,
    }
}

impl CoordinateSystem for Polar {
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
        match index {
            Self::RHO => <E::Scalar as Ring>::one(),
            _ => {
                let phi = expr.component(index);
                if expr.component(Self::RHO) < <E::Scalar as Ring>::zero() {
                    zero_to_two_pi(phi + <E::Scalar as Real>::pi())
                } else {
                    phi
                }
            }
        }
    }
}

impl CartesianForm for Polar {
    const CARTESIAN_SIZE: usize = 2;

    fn to_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let rho = expr.component(Self::RHO);
        let phi = expr.component(Self::PHI);
        match index {
            Cartesian::X => rho * phi.cos(),
            Cartesian::Y => rho * phi.sin(),
            _ => component_out_of_range(index, 2),
        }
    }

    fn from_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Cartesian>,
    {
        let x = expr.component(Cartesian::X);
        let y = expr.component(Cartesian::Y);
        match index {
            Self::RHO => (x * x + y * y).sqrt(),
            Self::PHI => zero_to_two_pi(y.atan2(x)),
            _ => component_out_of_range(index, 2),
        }
    }
}
