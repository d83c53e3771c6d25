//! Cylindrical coordinates in 3D space

use crate::components::{component_out_of_range, Cartesian, CoordinateSystem};
use crate::convert::CartesianForm;
use crate::expr::VectorExpression;
use crate::policy::zero_to_two_pi;
use crate::scalar::*;
use coordvec_macros::coordinate_system;

coordinate_system! {
    /// Cylindrical coordinates: polar coordinates in the XY plane plus a height
    ///
    /// Both linear components carry scale:
    /// multiplying by a scalar changes `rho` and `z` and leaves `phi` alone.
    /// The magnitude is `sqrt(rho² + z²)`.
    pub struct Cylindrical[3] {
        /// Distance from the Z axis
        rho | r: NoChange,
        /// Angle from the +X axis towards +Y, in `[0, 2π)`
        phi | azimuth: ZeroToTwoPi,
        /// Height above the XY plane
        z | height: NoChange,
    }
}

impl CoordinateSystem for Cylindrical {
    fn scale<E>(expr: &E, index: usize, factor: E::Scalar) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        match index {
            Self::PHI => expr.component(index),
            _ => expr.component(index) * factor,
        }
    }

    fn divide<E>(expr: &E, index: usize, divisor: E::Scalar) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        match index {
            Self::PHI => expr.component(index),
            _ => expr.component(index) / divisor,
        }
    }

    fn magnitude_squared<E>(expr: &E) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let rho = expr.component(Self::RHO);
        let z = expr.component(Self::Z);
        rho * rho + z * z
    }

    fn normalized<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let rho = expr.component(Self::RHO);
        match index {
            Self::RHO => rho.abs() / Self::magnitude(expr),
            Self::PHI if rho < <E::Scalar as Ring>::zero() => {
                zero_to_two_pi(expr.component(index) + <E::Scalar as Real>::pi())
            }
            Self::PHI => expr.component(index),
            _ => expr.component(index) / Self::magnitude(expr),
        }
    }
}

impl CartesianForm for Cylindrical {
    const CARTESIAN_SIZE: usize = 3;

    fn to_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        let rho = expr.component(Self::RHO);
        let phi = expr.component(Self::PHI);
        match index {
            Cartesian::X => rho * phi.cos(),
            Cartesian::Y => rho * phi.sin(),
            Cartesian::Z => expr.component(Self::Z),
            _ => component_out_of_range(index, 3),
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
            Self::Z => expr.component(Cartesian::Z),
            _ => component_out_of_range(index, 3),
        }
    }
}
