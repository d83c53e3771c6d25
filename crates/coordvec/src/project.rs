//! Decomposing a vector relative to a direction
//!
//! These functions are built entirely out of the public operations
//! ([Dot], [MagnitudeSquared], scalar multiplication and subtraction),
//! so they work in every coordinate system those operations are defined for.
//!
//! The direction `n` must have a non-zero, finite length.
//! The unchecked functions follow IEEE semantics when it doesn't,
//! returning non-finite components.
//! The `try_` variants check it and return [Error::DegenerateVector] instead.

use crate::error::{Error, Result};
use crate::expr::{ScalarExpression, ScalarMultiply, VectorDifference, VectorExpression};
use crate::ops::*;
use crate::scalar::*;

/// The component of `v` parallel to `n`, i.e. `n * (v • n / |n|²)`
///
/// The scale factor is computed immediately;
/// the resulting vector expression is lazy.
///
/// ```
/// use coordvec::prelude::*;
///
/// let n = Vector::<f64, 2>::new([2., 0.]);
/// let v = Vector::<f64, 2>::new([3., 4.]);
/// let p: Vector<f64, 2> = projection(&n, &v).eval();
/// assert_eq!(p, Vector::new([3., 0.]));
/// ```
pub fn projection<N, V>(n: N, v: V) -> ScalarMultiply<N, N::Scalar>
where
    N: VectorExpression,
    V: VectorExpression<Scalar = N::Scalar, Components = N::Components>,
{
    let factor = (&v).dot(&n).value() / (&n).magnitude_squared().value();
    ScalarMultiply::new(n, factor)
}

/// The component of `v` perpendicular to `n`, i.e. `v - projection(n, v)`
pub fn perpendicular<N, V>(n: N, v: V) -> VectorDifference<V, ScalarMultiply<N, N::Scalar>>
where
    N: VectorExpression,
    V: VectorExpression<Scalar = N::Scalar, Components = N::Components>,
{
    let parallel = projection(n, &v);
    VectorDifference::new(v, parallel)
}

/// Both [projection] and [perpendicular], as a pair `(parallel, perpendicular)`
///
/// The two parts always sum to `v`.
#[allow(clippy::type_complexity)]
pub fn project<N, V>(
    n: N,
    v: V,
) -> (
    ScalarMultiply<N, N::Scalar>,
    VectorDifference<V, ScalarMultiply<N, N::Scalar>>,
)
where
    N: VectorExpression + Clone,
    V: VectorExpression<Scalar = N::Scalar, Components = N::Components>,
{
    let parallel = projection(n, &v);
    (parallel.clone(), VectorDifference::new(v, parallel))
}

fn check_direction<N: VectorExpression>(n: &N) -> Result<()> {
    let magnitude_squared = n.magnitude_squared().value();
    if !magnitude_squared.is_finite() || magnitude_squared == <N::Scalar as Ring>::zero() {
        log::debug!(
            "cannot project onto a direction with squared length {}",
            magnitude_squared
        );
        return Err(Error::DegenerateVector);
    }
    Ok(())
}

/// [projection], or [Error::DegenerateVector] if `n` has zero or non-finite length
pub fn try_projection<N, V>(n: N, v: V) -> Result<ScalarMultiply<N, N::Scalar>>
where
    N: VectorExpression,
    V: VectorExpression<Scalar = N::Scalar, Components = N::Components>,
{
    check_direction(&n)?;
    Ok(projection(n, v))
}

/// [perpendicular], or [Error::DegenerateVector] if `n` has zero or non-finite length
pub fn try_perpendicular<N, V>(
    n: N,
    v: V,
) -> Result<VectorDifference<V, ScalarMultiply<N, N::Scalar>>>
where
    N: VectorExpression,
    V: VectorExpression<Scalar = N::Scalar, Components = N::Components>,
{
    check_direction(&n)?;
    Ok(perpendicular(n, v))
}

/// [project], or [Error::DegenerateVector] if `n` has zero or non-finite length
#[allow(clippy::type_complexity)]
pub fn try_project<N, V>(
    n: N,
    v: V,
) -> Result<(
    ScalarMultiply<N, N::Scalar>,
    VectorDifference<V, ScalarMultiply<N, N::Scalar>>,
)>
where
    N: VectorExpression + Clone,
    V: VectorExpression<Scalar = N::Scalar, Components = N::Components>,
{
    check_direction(&n)?;
    Ok(project(n, v))
}
