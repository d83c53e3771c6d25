//! Component layouts and the per-layout rules of the expression engine
//!
//! A component layout is a zero-sized marker type describing a coordinate system:
//! how many components it has, which names alias which index,
//! and which [ValuePolicy] guards each index.
//! Layouts are part of the static type of every vector and expression,
//! so there is never any runtime dispatch on the coordinate system.
//!
//! Layouts are usually declared with the [coordinate_system](crate::coordinate_system) macro,
//! which implements [Components].
//! The arithmetic meaning of a layout is given separately by [CoordinateSystem],
//! whose default methods are the component-wise Cartesian rules.

use crate::expr::VectorExpression;
use crate::policy::ValuePolicy;
use crate::scalar::*;
use core::fmt::Debug;
use coordvec_macros::coordinate_system;

/// Static description of a coordinate system's components
pub trait Components: Clone + Copy + Default + Debug + PartialEq + 'static {
    /// The smallest vector size this layout supports
    const MIN_COMPONENTS: usize;

    /// The largest vector size this layout supports
    const MAX_COMPONENTS: usize;

    /// Semantic names and the index each one aliases
    const NAMES: &'static [(&'static str, usize)];

    /// The policy applied to the component at `index` on every write
    fn value_policy(index: usize) -> ValuePolicy;

    /// Resolve a semantic name to its index
    fn index_of(name: &str) -> Option<usize> {
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, index)| index)
    }
}

/// How the expression engine evaluates arithmetic in a coordinate system
///
/// The provided methods are the Cartesian rules:
/// scalar multiplication and division act on every component,
/// the squared magnitude is the sum of squares,
/// and normalization divides every component by the magnitude.
/// Coordinate systems where a single component carries the scale
/// (e.g. [Polar](crate::Polar)) override them.
pub trait CoordinateSystem: Components {
    /// Component `index` of `expr * factor`
    fn scale<E>(expr: &E, index: usize, factor: E::Scalar) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        expr.component(index) * factor
    }

    /// Component `index` of `expr / divisor`
    fn divide<E>(expr: &E, index: usize, divisor: E::Scalar) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        expr.component(index) / divisor
    }

    fn magnitude_squared<E>(expr: &E) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        (0..E::SIZE).fold(<E::Scalar as Ring>::zero(), |sum, index| {
            let c = expr.component(index);
            sum + c * c
        })
    }

    fn magnitude<E>(expr: &E) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        Self::magnitude_squared(expr).sqrt()
    }

    /// Component `index` of the unit vector pointing the same way as `expr`
    fn normalized<E>(expr: &E, index: usize) -> E::Scalar
    where
        E: VectorExpression<Components = Self>,
    {
        expr.component(index) / Self::magnitude(expr)
    }
}

coordinate_system! {
    /// Cartesian coordinates with up to four independent axes
    ///
    /// Every component is unconstrained and arithmetic is component-wise.
    pub struct Cartesian[1..=4] {
        /// The first axis
        x: NoChange,
        /// The second axis
        y: NoChange,
        /// The third axis
        z: NoChange,
        /// The fourth axis
        w: NoChange,
    }
}

impl CoordinateSystem for Cartesian {}

/// Panic for a component index past the end of an expression.
///
/// Runtime indices are checked by [Vector::get](crate::Vector::get) and friends;
/// reaching this means an expression was asked for a component it does not have.
#[cold]
pub(crate) fn component_out_of_range(index: usize, size: usize) -> ! {
    panic!(
        "component index {} is out of range for a vector of size {}",
        index, size
    )
}
