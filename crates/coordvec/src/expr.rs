//! Lazily evaluated vector expressions
//!
//! Arithmetic on vectors does not compute anything by itself.
//! `&a + &b * 2.` builds a small tree of expression nodes
//! that borrow (or own) their operands,
//! and a component is only computed when it is asked for,
//! either through [VectorExpression::component] or by materializing the whole
//! expression into a [Vector] with [eval](VectorExpression::eval).
//! Nothing is allocated and no intermediate vector is built.
//!
//! Every node carries the coordinate system of its operands,
//! and evaluates through that system's [CoordinateSystem] rules.
//! This is what makes `polar * 2.` scale only the radius.
//!
//! ```
//! use coordvec::prelude::*;
//!
//! let a = Vector::<f64, 2>::new([1., 2.]);
//! let b = Vector::<f64, 2>::new([3., 4.]);
//!
//! let sum = &a + &b * 2.; // nothing is computed yet
//! assert_eq!(sum.component(1), 10.);
//!
//! let sum: Vector<f64, 2> = sum.eval();
//! assert_eq!(sum, Vector::new([7., 10.]));
//! ```

use crate::components::{Components, CoordinateSystem};
use crate::ops::*;
use crate::scalar::*;
use crate::vector::Vector;
use core::marker::PhantomData;

/// A vector-valued expression, evaluated one component at a time
pub trait VectorExpression {
    /// The scalar type of every component
    type Scalar: Real;

    /// The coordinate system this expression is expressed in
    type Components: CoordinateSystem;

    /// The number of components
    const SIZE: usize;

    /// Evaluate a single component.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::SIZE`.
    fn component(&self, index: usize) -> Self::Scalar;

    /// Evaluate the component at a compile-time index.
    ///
    /// An index past the end of the expression fails the build:
    ///
    /// ```compile_fail
    /// use coordvec::prelude::*;
    ///
    /// let v = Vector::<f64, 2>::new([1., 2.]);
    /// let z = v.at::<2>();
    /// ```
    fn at<const I: usize>(&self) -> Self::Scalar
    where
        Self: Sized,
    {
        let () = IndexCheck::<Self, I>::VALID;
        self.component(I)
    }

    /// Materialize this expression into a vector.
    ///
    /// Each component is evaluated once and passed through the target's value policies.
    /// If `N` differs from the expression's size,
    /// extra components are dropped and missing ones are zero-filled.
    fn eval<const N: usize>(&self) -> Vector<Self::Scalar, N, Self::Components>
    where
        Self: Sized,
    {
        Vector::from_expression(self)
    }
}

/// A scalar-valued expression such as a magnitude or a dot product
pub trait ScalarExpression {
    type Scalar: Real;

    /// Compute the value
    fn value(&self) -> Self::Scalar;
}

impl<'a, E: VectorExpression> VectorExpression for &'a E {
    type Scalar = E::Scalar;
    type Components = E::Components;
    const SIZE: usize = E::SIZE;

    #[inline]
    fn component(&self, index: usize) -> E::Scalar {
        (**self).component(index)
    }
}

impl<'a, E: ScalarExpression> ScalarExpression for &'a E {
    type Scalar = E::Scalar;

    #[inline]
    fn value(&self) -> E::Scalar {
        (**self).value()
    }
}

pub(crate) struct IndexCheck<E, const I: usize>(PhantomData<E>);

impl<E: VectorExpression, const I: usize> IndexCheck<E, I> {
    pub(crate) const VALID: () = assert!(I < E::SIZE, "component index is out of range");
}

struct SizeCheck<L, R>(PhantomData<(L, R)>);

impl<L: VectorExpression, R: VectorExpression> SizeCheck<L, R> {
    const SAME_SIZE: () = assert!(L::SIZE == R::SIZE, "vector operands differ in size");
}

/// The sum of two vector expressions, `lhs + rhs`
#[derive(Clone, Copy, Debug)]
pub struct VectorSum<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> VectorSum<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    /// Operands of different sizes fail the build:
    ///
    /// ```compile_fail
    /// use coordvec::prelude::*;
    ///
    /// let a = Vector::<f64, 2>::new([1., 2.]);
    /// let b = Vector::<f64, 3>::new([1., 2., 3.]);
    /// let sum = &a + &b;
    /// ```
    pub fn new(lhs: L, rhs: R) -> Self {
        let () = SizeCheck::<L, R>::SAME_SIZE;
        VectorSum { lhs, rhs }
    }
}

impl<L, R> VectorExpression for VectorSum<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    type Scalar = L::Scalar;
    type Components = L::Components;
    const SIZE: usize = L::SIZE;

    #[inline]
    fn component(&self, index: usize) -> L::Scalar {
        self.lhs.component(index) + self.rhs.component(index)
    }
}

/// The difference of two vector expressions, `lhs - rhs`
#[derive(Clone, Copy, Debug)]
pub struct VectorDifference<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> VectorDifference<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    pub fn new(lhs: L, rhs: R) -> Self {
        let () = SizeCheck::<L, R>::SAME_SIZE;
        VectorDifference { lhs, rhs }
    }
}

impl<L, R> VectorExpression for VectorDifference<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    type Scalar = L::Scalar;
    type Components = L::Components;
    const SIZE: usize = L::SIZE;

    #[inline]
    fn component(&self, index: usize) -> L::Scalar {
        self.lhs.component(index) - self.rhs.component(index)
    }
}

/// A vector expression scaled by a scalar, `expr * factor`
///
/// Which components are scaled depends on the coordinate system;
/// see [CoordinateSystem::scale].
#[derive(Clone, Copy, Debug)]
pub struct ScalarMultiply<E, S> {
    expr: E,
    factor: S,
}

impl<E, S> ScalarMultiply<E, S>
where
    E: VectorExpression<Scalar = S>,
    S: Real,
{
    pub fn new(expr: E, factor: S) -> Self {
        ScalarMultiply { expr, factor }
    }
}

impl<E, S> VectorExpression for ScalarMultiply<E, S>
where
    E: VectorExpression<Scalar = S>,
    S: Real,
{
    type Scalar = E::Scalar;
    type Components = E::Components;
    const SIZE: usize = E::SIZE;

    #[inline]
    fn component(&self, index: usize) -> E::Scalar {
        <E::Components as CoordinateSystem>::scale(&self.expr, index, self.factor)
    }
}

/// A vector expression divided by a scalar, `expr / divisor`
///
/// Which components are divided depends on the coordinate system;
/// see [CoordinateSystem::divide].
/// Dividing by zero follows IEEE semantics.
#[derive(Clone, Copy, Debug)]
pub struct ScalarDivide<E, S> {
    expr: E,
    divisor: S,
}

impl<E, S> ScalarDivide<E, S>
where
    E: VectorExpression<Scalar = S>,
    S: Real,
{
    pub fn new(expr: E, divisor: S) -> Self {
        ScalarDivide { expr, divisor }
    }
}

impl<E, S> VectorExpression for ScalarDivide<E, S>
where
    E: VectorExpression<Scalar = S>,
    S: Real,
{
    type Scalar = E::Scalar;
    type Components = E::Components;
    const SIZE: usize = E::SIZE;

    #[inline]
    fn component(&self, index: usize) -> E::Scalar {
        <E::Components as CoordinateSystem>::divide(&self.expr, index, self.divisor)
    }
}

/// The unit vector pointing the same way as an expression
///
/// Normalizing a zero vector produces non-finite components;
/// see [Vector::try_normalized] for a checked alternative.
#[derive(Clone, Copy, Debug)]
pub struct VectorNormalize<E> {
    expr: E,
}

impl<E: VectorExpression> VectorNormalize<E> {
    pub fn new(expr: E) -> Self {
        VectorNormalize { expr }
    }
}

impl<E: VectorExpression> VectorExpression for VectorNormalize<E> {
    type Scalar = E::Scalar;
    type Components = E::Components;
    const SIZE: usize = E::SIZE;

    #[inline]
    fn component(&self, index: usize) -> E::Scalar {
        <E::Components as CoordinateSystem>::normalized(&self.expr, index)
    }
}

/// The length of a vector expression
#[derive(Clone, Copy, Debug)]
pub struct VectorMagnitude<E> {
    expr: E,
}

impl<E: VectorExpression> VectorMagnitude<E> {
    pub fn new(expr: E) -> Self {
        VectorMagnitude { expr }
    }
}

impl<E: VectorExpression> ScalarExpression for VectorMagnitude<E> {
    type Scalar = E::Scalar;

    #[inline]
    fn value(&self) -> E::Scalar {
        <E::Components as CoordinateSystem>::magnitude(&self.expr)
    }
}

/// The squared length of a vector expression
#[derive(Clone, Copy, Debug)]
pub struct VectorMagnitudeSquared<E> {
    expr: E,
}

impl<E: VectorExpression> VectorMagnitudeSquared<E> {
    pub fn new(expr: E) -> Self {
        VectorMagnitudeSquared { expr }
    }
}

impl<E: VectorExpression> ScalarExpression for VectorMagnitudeSquared<E> {
    type Scalar = E::Scalar;

    #[inline]
    fn value(&self) -> E::Scalar {
        <E::Components as CoordinateSystem>::magnitude_squared(&self.expr)
    }
}

/// The component-wise dot product of two vector expressions
#[derive(Clone, Copy, Debug)]
pub struct DotProduct<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> DotProduct<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    /// ```compile_fail
    /// use coordvec::prelude::*;
    ///
    /// let a = Vector::<f64, 2>::new([1., 2.]);
    /// let b = Vector::<f64, 3>::new([1., 2., 3.]);
    /// let d = a.dot(&b).value();
    /// ```
    pub fn new(lhs: L, rhs: R) -> Self {
        let () = SizeCheck::<L, R>::SAME_SIZE;
        DotProduct { lhs, rhs }
    }
}

impl<L, R> ScalarExpression for DotProduct<L, R>
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    type Scalar = L::Scalar;

    fn value(&self) -> L::Scalar {
        (0..L::SIZE).fold(<L::Scalar as Ring>::zero(), |sum, index| {
            sum + self.lhs.component(index) * self.rhs.component(index)
        })
    }
}

impl<L, R> Dot<R> for L
where
    L: VectorExpression,
    R: VectorExpression<Scalar = L::Scalar, Components = L::Components>,
{
    type Output = DotProduct<L, R>;
    fn dot(self, r: R) -> DotProduct<L, R> {
        DotProduct::new(self, r)
    }
}

impl<E: VectorExpression> Magnitude for E {
    type Output = VectorMagnitude<E>;
    fn magnitude(self) -> VectorMagnitude<E> {
        VectorMagnitude::new(self)
    }
}

impl<E: VectorExpression> MagnitudeSquared for E {
    type Output = VectorMagnitudeSquared<E>;
    fn magnitude_squared(self) -> VectorMagnitudeSquared<E> {
        VectorMagnitudeSquared::new(self)
    }
}

impl<E: VectorExpression> Normalized for E {
    type Output = VectorNormalize<E>;
    fn normalized(self) -> VectorNormalize<E> {
        VectorNormalize::new(self)
    }
}

/// Implement the arithmetic operators for a vector expression type.
///
/// `+` and `-` accept any expression with the same scalar type and coordinate system,
/// `*` and `/` take the scalar on the right, and with `std`, `f32`/`f64` may also multiply from the left.
macro_rules! impl_vector_ops {
    ([$($gen:tt)*] $type:ty) => {
        impl<$($gen)* Rhs> core::ops::Add<Rhs> for $type
        where
            $type: $crate::expr::VectorExpression,
            Rhs: $crate::expr::VectorExpression<
                Scalar = <$type as $crate::expr::VectorExpression>::Scalar,
                Components = <$type as $crate::expr::VectorExpression>::Components,
            >,
        {
            type Output = $crate::expr::VectorSum<$type, Rhs>;
            fn add(self, rhs: Rhs) -> Self::Output {
                $crate::expr::VectorSum::new(self, rhs)
            }
        }

        impl<$($gen)* Rhs> core::ops::Sub<Rhs> for $type
        where
            $type: $crate::expr::VectorExpression,
            Rhs: $crate::expr::VectorExpression<
                Scalar = <$type as $crate::expr::VectorExpression>::Scalar,
                Components = <$type as $crate::expr::VectorExpression>::Components,
            >,
        {
            type Output = $crate::expr::VectorDifference<$type, Rhs>;
            fn sub(self, rhs: Rhs) -> Self::Output {
                $crate::expr::VectorDifference::new(self, rhs)
            }
        }

        impl<$($gen)*> core::ops::Mul<<$type as $crate::expr::VectorExpression>::Scalar> for $type
        where
            $type: $crate::expr::VectorExpression,
        {
            type Output = $crate::expr::ScalarMultiply<
                $type,
                <$type as $crate::expr::VectorExpression>::Scalar,
            >;
            fn mul(
                self,
                factor: <$type as $crate::expr::VectorExpression>::Scalar,
            ) -> Self::Output {
                $crate::expr::ScalarMultiply::new(self, factor)
            }
        }

        impl<$($gen)*> core::ops::Div<<$type as $crate::expr::VectorExpression>::Scalar> for $type
        where
            $type: $crate::expr::VectorExpression,
        {
            type Output = $crate::expr::ScalarDivide<
                $type,
                <$type as $crate::expr::VectorExpression>::Scalar,
            >;
            fn div(
                self,
                divisor: <$type as $crate::expr::VectorExpression>::Scalar,
            ) -> Self::Output {
                $crate::expr::ScalarDivide::new(self, divisor)
            }
        }

        #[cfg(feature = "std")]
        impl<$($gen)*> core::ops::Mul<$type> for f32
        where
            $type: $crate::expr::VectorExpression<Scalar = f32>,
        {
            type Output = $crate::expr::ScalarMultiply<$type, f32>;
            fn mul(self, expr: $type) -> Self::Output {
                $crate::expr::ScalarMultiply::new(expr, self)
            }
        }

        #[cfg(feature = "std")]
        impl<$($gen)*> core::ops::Mul<$type> for f64
        where
            $type: $crate::expr::VectorExpression<Scalar = f64>,
        {
            type Output = $crate::expr::ScalarMultiply<$type, f64>;
            fn mul(self, expr: $type) -> Self::Output {
                $crate::expr::ScalarMultiply::new(expr, self)
            }
        }
    };
}

pub(crate) use impl_vector_ops;

impl_vector_ops!([T: Real, const N: usize, C: Components,] Vector<T, N, C>);
impl_vector_ops!(['a, T: Real, const N: usize, C: Components,] &'a Vector<T, N, C>);
impl_vector_ops!([L, R,] VectorSum<L, R>);
impl_vector_ops!([L, R,] VectorDifference<L, R>);
impl_vector_ops!([E, S,] ScalarMultiply<E, S>);
impl_vector_ops!([E, S,] ScalarDivide<E, S>);
impl_vector_ops!([E,] VectorNormalize<E>);
