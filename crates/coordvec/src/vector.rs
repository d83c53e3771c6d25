use crate::components::{Cartesian, Components, CoordinateSystem};
use crate::error::{Error, Result};
use crate::expr::{IndexCheck, ScalarExpression, VectorDifference, VectorExpression, VectorSum};
use crate::ops::*;
use crate::scalar::*;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{AddAssign, DivAssign, Index, MulAssign, SubAssign};

/// A fixed-size vector tagged with its coordinate system
///
/// `Vector<T, N, C>` stores `N` scalars of type `T`
/// interpreted in the coordinate system `C` (by default [Cartesian]).
/// The coordinate system is part of the type and takes no space.
///
/// Every way of writing to a vector applies the [value policy](crate::ValuePolicy)
/// of each component, so angles are always wrapped or clamped into their domain.
///
/// Arithmetic on vectors (`+`, `-`, `*`, `/`, [dot](Dot), [magnitude](Magnitude), ...)
/// produces [lazy expressions](crate::expr) rather than new vectors.
/// Use [eval](VectorExpression::eval) or [from_expression](Vector::from_expression)
/// to materialize them.
///
/// A vector size outside the range its coordinate system supports fails the build.
///
/// ```
/// use coordvec::prelude::*;
/// use core::f64::consts::PI;
///
/// let p = Vector::<f64, 2, Polar>::new([2., -PI / 2.]);
/// assert_eq!(p.rho(), 2.);
/// assert_eq!(p.phi(), 3. * PI / 2.); // wrapped into [0, 2π)
///
/// // Scaling a polar vector only changes its radius
/// let q: Vector<f64, 2, Polar> = (&p * 3.).eval();
/// assert_eq!(q.rho(), 6.);
/// assert_eq!(q.phi(), p.phi());
/// ```
///
/// Polar vectors have exactly two components:
///
/// ```compile_fail
/// use coordvec::prelude::*;
///
/// let p = Vector::<f64, 3, Polar>::new([1., 2., 3.]);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize, C = Cartesian> {
    data: [T; N],
    components: PhantomData<C>,
}

impl<T, const N: usize, C: Components> Vector<T, N, C> {
    const VALID_SIZE: () = assert!(
        N >= C::MIN_COMPONENTS && N <= C::MAX_COMPONENTS,
        "vector size is not supported by its coordinate system"
    );
}

impl<T: Real, const N: usize, C: CoordinateSystem> Vector<T, N, C> {
    fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let () = Self::VALID_SIZE;
        Vector {
            data: core::array::from_fn(|index| C::value_policy(index).apply(f(index))),
            components: PhantomData,
        }
    }

    /// Construct a vector from its components
    pub fn new(values: [T; N]) -> Self {
        Self::from_fn(|index| values[index])
    }

    /// Construct a vector with every component set to the same value
    /// (before value policies are applied)
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value)
    }

    /// Construct a vector by copying exactly `N` values out of a slice
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != N {
            log::debug!(
                "cannot build a {}-component vector from {} values",
                N,
                values.len()
            );
            return Err(Error::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|index| values[index]))
    }

    /// Construct a vector from another vector of the same coordinate system
    /// but possibly a different size or scalar type.
    ///
    /// The first `min(N, M)` components are copied and any remaining ones are zero.
    pub fn resized_from<U, const M: usize>(other: &Vector<U, M, C>) -> Self
    where
        U: Copy + Into<T>,
    {
        Self::from_fn(|index| {
            if index < M {
                other.data[index].into()
            } else {
                T::zero()
            }
        })
    }

    /// Materialize a vector expression.
    ///
    /// The first `min(N, E::SIZE)` components are evaluated and any remaining ones are zero.
    pub fn from_expression<E>(expr: E) -> Self
    where
        E: VectorExpression<Scalar = T, Components = C>,
    {
        Self::from_fn(|index| {
            if index < E::SIZE {
                expr.component(index)
            } else {
                T::zero()
            }
        })
    }

    /// Store a component at a compile-time index, applying its value policy.
    ///
    /// An index past the end of the vector fails the build.
    pub fn set_at<const I: usize>(&mut self, value: T) {
        let () = IndexCheck::<Self, I>::VALID;
        self.data[I] = C::value_policy(I).apply(value);
    }

    /// Modify a component at a compile-time index in place.
    ///
    /// `f` works on a copy of the component, which is stored back through its value policy.
    /// If `f` panics the vector is left unchanged.
    ///
    /// ```
    /// use coordvec::prelude::*;
    /// use core::f64::consts::PI;
    ///
    /// let mut p = Vector::<f64, 2, Polar>::new([1., 0.]);
    /// p.update_at::<{ Polar::PHI }, _>(|phi| *phi -= PI / 2.);
    /// assert_eq!(p.phi(), 3. * PI / 2.);
    /// ```
    pub fn update_at<const I: usize, R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let () = IndexCheck::<Self, I>::VALID;
        let mut value = self.data[I];
        let result = f(&mut value);
        self.data[I] = C::value_policy(I).apply(value);
        result
    }

    /// The component at a runtime index, or `None` if it is out of range
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Modify the component at a runtime index in place, applying its value policy.
    ///
    /// The runtime-checked form of [update_at](Self::update_at).
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        match self.data.get(index).copied() {
            Some(mut value) => {
                let result = f(&mut value);
                self.data[index] = C::value_policy(index).apply(value);
                Ok(result)
            }
            None => {
                log::debug!(
                    "component index {} is out of range for a vector of size {}",
                    index,
                    N
                );
                Err(Error::IndexOutOfRange { index, size: N })
            }
        }
    }

    /// Store a component at a runtime index, applying its value policy
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = C::value_policy(index).apply(value);
                Ok(())
            }
            None => {
                log::debug!(
                    "component index {} is out of range for a vector of size {}",
                    index,
                    N
                );
                Err(Error::IndexOutOfRange { index, size: N })
            }
        }
    }

    /// The component with the given semantic name, e.g. `"azimuth"`
    pub fn get_named(&self, name: &str) -> Result<T> {
        match C::index_of(name) {
            Some(index) => self.get(index).ok_or_else(|| {
                log::debug!(
                    "component {:?} (index {}) is missing from a vector of size {}",
                    name,
                    index,
                    N
                );
                Error::IndexOutOfRange { index, size: N }
            }),
            None => {
                log::debug!("no component named {:?} in {:?}", name, C::default());
                Err(Error::UnknownComponent)
            }
        }
    }

    /// Raw read-only view of the components
    pub fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Raw read-only view of the components
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_array(self) -> [T; N] {
        self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Raw mutable view of the components.
    ///
    /// `f` works on a copy of the components.
    /// Value policies are applied to every component once `f` returns.
    /// If `f` panics the vector is left unchanged.
    pub fn update_data<R>(&mut self, f: impl FnOnce(&mut [T; N]) -> R) -> R {
        let mut data = self.data;
        let result = f(&mut data);
        for (index, value) in data.into_iter().enumerate() {
            self.data[index] = C::value_policy(index).apply(value);
        }
        result
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|value| value.is_finite())
    }

    /// Normalize this vector in place.
    ///
    /// A zero vector becomes non-finite; see [try_normalized](Self::try_normalized).
    pub fn normalize(&mut self) {
        let normalized = Self::from_expression(self.normalized());
        *self = normalized;
    }

    /// The unit vector pointing the same way as this one,
    /// or [Error::DegenerateVector] if it has zero length or any non-finite component
    pub fn try_normalized(&self) -> Result<Self> {
        let magnitude = self.magnitude().value();
        if !self.is_finite() || !magnitude.is_finite() || magnitude == T::zero() {
            log::debug!("cannot normalize {:?}: magnitude is {}", self, magnitude);
            return Err(Error::DegenerateVector);
        }
        Ok(Self::from_expression(self.normalized()))
    }

    /// Convert into another representation, e.g. from Cartesian to polar coordinates
    ///
    /// ```
    /// use coordvec::prelude::*;
    /// use core::f64::consts::FRAC_PI_2;
    ///
    /// let v = Vector::<f64, 2>::new([0., 1.]);
    /// let p = v.convert::<Vector<f64, 2, Polar>>();
    /// assert_eq!(p.rho(), 1.);
    /// assert_eq!(p.phi(), FRAC_PI_2);
    /// ```
    pub fn convert<U: From<Self>>(&self) -> U {
        U::from(*self)
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem> VectorExpression for Vector<T, N, C> {
    type Scalar = T;
    type Components = C;
    const SIZE: usize = N;

    #[inline]
    fn component(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem> Default for Vector<T, N, C> {
    fn default() -> Self {
        Self::splat(T::zero())
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem> From<[T; N]> for Vector<T, N, C> {
    fn from(values: [T; N]) -> Self {
        Self::new(values)
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem> Index<usize> for Vector<T, N, C> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= N`. Use [get](Vector::get) for a checked alternative.
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(value) => value,
            None => crate::components::component_out_of_range(index, N),
        }
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem, R> AddAssign<R> for Vector<T, N, C>
where
    R: VectorExpression<Scalar = T, Components = C>,
{
    fn add_assign(&mut self, rhs: R) {
        let sum = Self::from_expression(VectorSum::new(&*self, rhs));
        *self = sum;
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem, R> SubAssign<R> for Vector<T, N, C>
where
    R: VectorExpression<Scalar = T, Components = C>,
{
    fn sub_assign(&mut self, rhs: R) {
        let difference = Self::from_expression(VectorDifference::new(&*self, rhs));
        *self = difference;
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem> MulAssign<T> for Vector<T, N, C> {
    fn mul_assign(&mut self, factor: T) {
        let scaled = Self::from_expression(&*self * factor);
        *self = scaled;
    }
}

impl<T: Real, const N: usize, C: CoordinateSystem> DivAssign<T> for Vector<T, N, C> {
    fn div_assign(&mut self, divisor: T) {
        let scaled = Self::from_expression(&*self / divisor);
        *self = scaled;
    }
}

impl<T: Real, const N: usize, C: Components> fmt::Debug for Vector<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", C::default())?;
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Real, const N: usize, C: Components> fmt::Display for Vector<T, N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (index, value) in self.data.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const N: usize, C> approx::AbsDiffEq for Vector<T, N, C>
where
    T: Real + approx::AbsDiffEq<Epsilon = T>,
    C: Components,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(any(test, feature = "approx"))]
impl<T, const N: usize, C> approx::RelativeEq for Vector<T, N, C>
where
    T: Real + approx::RelativeEq<Epsilon = T>,
    C: Components,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
