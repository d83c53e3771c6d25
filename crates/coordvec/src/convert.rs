//! Conversion between coordinate systems
//!
//! Every non-Cartesian coordinate system that implements [CartesianForm]
//! can be converted to and from Cartesian coordinates of the same size.
//! Conversions are lazy expressions like any other,
//! so they compose with the rest of the arithmetic:
//!
//! ```
//! use coordvec::prelude::*;
//! use approx::assert_relative_eq;
//!
//! let p = Vector::<f64, 2, Polar>::new([2., core::f64::consts::FRAC_PI_2]);
//! let q = Vector::<f64, 2, Polar>::new([1., 0.]);
//!
//! // Add two polar vectors in Cartesian space, then go back to polar
//! let sum: Vector<f64, 2, Polar> = (p.to_cartesian() + q.to_cartesian()).to_polar().eval();
//! assert_relative_eq!(sum.rho(), 5_f64.sqrt());
//! ```
//!
//! Whole vectors also convert with [From]/[Into] or [Vector::convert].

use crate::components::{Cartesian, CoordinateSystem};
use crate::cylindrical::Cylindrical;
use crate::expr::{impl_vector_ops, VectorExpression};
use crate::polar::Polar;
use crate::scalar::*;
use crate::spherical::Spherical;
use crate::vector::Vector;
use core::marker::PhantomData;

/// A coordinate system with a well-defined mapping to and from Cartesian coordinates
pub trait CartesianForm: CoordinateSystem {
    /// The number of Cartesian components on the other side of the mapping
    const CARTESIAN_SIZE: usize;

    /// Cartesian component `index` of `expr`
    fn to_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>;

    /// Component `index` of the Cartesian expression `expr`, expressed in this coordinate system
    fn from_cartesian<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Cartesian>;
}

struct FormCheck<E, C>(PhantomData<(E, C)>);

impl<E: VectorExpression, C: CartesianForm> FormCheck<E, C> {
    const SAME_SIZE: () = assert!(
        E::SIZE == C::CARTESIAN_SIZE,
        "vector size does not match the coordinate system's Cartesian form"
    );
}

/// An expression converted into Cartesian coordinates
#[derive(Clone, Copy, Debug)]
pub struct ToCartesian<E> {
    expr: E,
}

impl<E> ToCartesian<E>
where
    E: VectorExpression,
    E::Components: CartesianForm,
{
    pub fn new(expr: E) -> Self {
        let () = FormCheck::<E, E::Components>::SAME_SIZE;
        ToCartesian { expr }
    }
}

impl<E> VectorExpression for ToCartesian<E>
where
    E: VectorExpression,
    E::Components: CartesianForm,
{
    type Scalar = E::Scalar;
    type Components = Cartesian;
    const SIZE: usize = E::SIZE;

    #[inline]
    fn component(&self, index: usize) -> E::Scalar {
        <E::Components as CartesianForm>::to_cartesian(&self.expr, index)
    }
}

/// A Cartesian expression converted into the coordinate system `C`
#[derive(Clone, Copy, Debug)]
pub struct FromCartesian<E, C> {
    expr: E,
    system: PhantomData<C>,
}

impl<E, C> FromCartesian<E, C>
where
    E: VectorExpression<Components = Cartesian>,
    C: CartesianForm,
{
    pub fn new(expr: E) -> Self {
        let () = FormCheck::<E, C>::SAME_SIZE;
        FromCartesian {
            expr,
            system: PhantomData,
        }
    }
}

impl<E, C> VectorExpression for FromCartesian<E, C>
where
    E: VectorExpression<Components = Cartesian>,
    C: CartesianForm,
{
    type Scalar = E::Scalar;
    type Components = C;
    const SIZE: usize = E::SIZE;

    #[inline]
    fn component(&self, index: usize) -> E::Scalar {
        C::from_cartesian(&self.expr, index)
    }
}

impl_vector_ops!([E,] ToCartesian<E>);
impl_vector_ops!([E, C,] FromCartesian<E, C>);

/// Lazy coordinate system conversions, available on every vector expression
pub trait ConvertExpression: VectorExpression + Sized {
    /// Convert into Cartesian coordinates
    fn to_cartesian(self) -> ToCartesian<Self>
    where
        Self::Components: CartesianForm,
    {
        ToCartesian::new(self)
    }

    /// Convert Cartesian coordinates into the coordinate system `C`
    fn to_coordinates<C: CartesianForm>(self) -> FromCartesian<Self, C>
    where
        Self: VectorExpression<Components = Cartesian>,
    {
        FromCartesian::new(self)
    }

    /// Convert 2D Cartesian coordinates into polar coordinates
    fn to_polar(self) -> FromCartesian<Self, Polar>
    where
        Self: VectorExpression<Components = Cartesian>,
    {
        FromCartesian::new(self)
    }

    /// Convert 3D Cartesian coordinates into spherical coordinates
    fn to_spherical(self) -> FromCartesian<Self, Spherical>
    where
        Self: VectorExpression<Components = Cartesian>,
    {
        FromCartesian::new(self)
    }

    /// Convert 3D Cartesian coordinates into cylindrical coordinates
    fn to_cylindrical(self) -> FromCartesian<Self, Cylindrical>
    where
        Self: VectorExpression<Components = Cartesian>,
    {
        FromCartesian::new(self)
    }
}

impl<E: VectorExpression> ConvertExpression for E {}

macro_rules! impl_from_cartesian {
    ($system:ident, $size:literal) => {
        impl<T: Real> From<Vector<T, $size>> for Vector<T, $size, $system> {
            fn from(v: Vector<T, $size>) -> Self {
                Vector::from_expression(FromCartesian::<_, $system>::new(v))
            }
        }

        impl<T: Real> From<Vector<T, $size, $system>> for Vector<T, $size> {
            fn from(v: Vector<T, $size, $system>) -> Self {
                Vector::from_expression(ToCartesian::new(v))
            }
        }
    };
}

impl_from_cartesian!(Polar, 2);
impl_from_cartesian!(Spherical, 3);
impl_from_cartesian!(Cylindrical, 3);
