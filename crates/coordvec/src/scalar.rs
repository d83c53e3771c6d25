//! Traits that govern the scalar data type used by coordvec
//!
//! Vectors in every coordinate system are built from sums, products and quotients,
//! but the angular systems additionally need square roots, trigonometry and the constant π.
//! The full set of requirements is collected in [Real],
//! which is what the expression engine is generic over.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// A scalar datatype whose absolute value can be taken.
pub trait Abs {
    type Output;

    /// Computes the absolute value of a scalar.
    fn abs(self) -> Self::Output;
}

/// A scalar datatype which is closed under addition and multiplication.
///
/// see <https://en.wikipedia.org/wiki/Ring_(mathematics)>
///
/// `Ring` requires that its datatype is `Copy` to avoid the need to clone or borrow when writing
/// mathematical expressions. If your scalar datatype is expensive to copy,
/// consider implementing `Ring` on a reference-counted container that is `Copy`.
pub trait Ring:
    Clone
    + Copy
    + Neg<Output = Self>
    + Abs<Output = Self>
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Default
{
    /// The additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// The multiplicative identity
    fn one() -> Self {
        Self::from_integer(1)
    }

    /// Construct an integer scalar
    fn from_integer(i: isize) -> Self;
}

/// A scalar datatype which can represent fractional values such as ½.
pub trait Rational: Ring {
    /// Construct a rational scalar
    /// from an integer numerator and integer denominator
    fn from_fraction(numerator: isize, denominator: isize) -> Self;

    /// A scalar value that when multiplied by 2 equals [one](Ring::one)
    fn one_half() -> Self {
        Self::from_fraction(1, 2)
    }
}

/// A scalar datatype which is closed under the square root function.
///
/// ## `sqrt()` of negative numbers
///
/// When given a negative value,
/// this function must either return a valid scalar datatype (e.g. `f32::NaN`)
/// or panic. There are no other provisions for exception handling at this level.
///
/// All uses of `sqrt()` within the library are on sums of squares,
/// so its use within the library is NaN-free for finite inputs.
pub trait Sqrt: Ring {
    // The scalar datatype for the square root
    type Output;

    // This scalar's positive square root
    fn sqrt(self) -> <Self as Sqrt>::Output;
}

/// A scalar datatype which implements trigonometric functions.
///
/// Sines and cosines are needed to take polar, spherical and cylindrical coordinates
/// back to Cartesian form, and `atan2` to go the other way.
///
/// `Trig` comes implemented for `f32` → `f32` and `f64` → `f64`.
pub trait Trig {
    // The scalar datatype for linear quantities
    // (output of `sin()` and `cos()`)
    type Output: Ring;

    // The cosine of a scalar (in radians)
    fn cos(self) -> Self::Output;

    // The sine of a scalar (in radians)
    fn sin(self) -> Self::Output;

    // The four-quadrant arctangent of `self / x`, in (-π, π]
    fn atan2(self, x: Self) -> Self::Output;
}

/// A real-valued scalar: everything the expression engine needs from its scalar type.
///
/// `Real` comes implemented for `f32` and `f64` when the `std` feature is enabled.
/// In a `no_std` build, implement it (and its supertraits) for your own float type.
pub trait Real:
    Rational
    + PartialOrd
    + Div<Self, Output = Self>
    + Rem<Self, Output = Self>
    + Sqrt<Output = Self>
    + Trig<Output = Self>
    + Debug
    + Display
{
    /// The ratio of a circle's circumference to its diameter
    fn pi() -> Self;

    /// A full turn, 2π
    fn two_pi() -> Self {
        Self::pi() + Self::pi()
    }

    /// A quarter turn, π/2
    fn half_pi() -> Self {
        Self::pi() * Self::one_half()
    }

    /// Whether this value is neither infinite nor NaN
    fn is_finite(self) -> bool;
}

macro_rules! impl_for_float {
    ($type:ident) => {
        #[cfg(feature = "std")]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                self.abs()
            }
        }
        #[cfg(not(feature = "std"))]
        impl Abs for $type {
            type Output = $type;
            fn abs(self) -> $type {
                if self < 0. {
                    -self
                } else {
                    self
                }
            }
        }

        impl Ring for $type {
            fn from_integer(i: isize) -> $type {
                i as $type
            }
        }

        impl Rational for $type {
            fn from_fraction(numerator: isize, denominator: isize) -> $type {
                numerator as $type / denominator as $type
            }
        }

        #[cfg(feature = "std")]
        impl Sqrt for $type {
            type Output = $type;
            fn sqrt(self) -> $type {
                self.sqrt()
            }
        }

        #[cfg(feature = "std")]
        impl Trig for $type {
            type Output = $type;

            fn cos(self) -> $type {
                self.cos()
            }
            fn sin(self) -> $type {
                self.sin()
            }
            fn atan2(self, x: $type) -> $type {
                self.atan2(x)
            }
        }

        #[cfg(feature = "std")]
        impl Real for $type {
            fn pi() -> $type {
                core::$type::consts::PI
            }
            fn two_pi() -> $type {
                core::$type::consts::TAU
            }
            fn half_pi() -> $type {
                core::$type::consts::FRAC_PI_2
            }
            fn is_finite(self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_for_float!(f32);
impl_for_float!(f64);
