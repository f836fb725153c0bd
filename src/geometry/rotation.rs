use core::{
    fmt,
    ops::{Add, Neg, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{UnitComplex, Vector2};
use num_traits::Float;

use super::EPSILON;

/// A heading in the plane.
///
/// Stored as a unit complex number, i.e. the normalized `(cos θ, sin θ)` pair,
/// so composing rotations never has to wrap an angle. Degrees and radians only
/// appear at construction and when reading the angle back out.
#[derive(Clone, Copy, Debug)]
pub struct Rotation(UnitComplex<f64>);

impl Rotation {
    pub fn identity() -> Self {
        Self(UnitComplex::identity())
    }

    pub fn from_radians(radians: f64) -> Self {
        Self(UnitComplex::new(radians))
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Builds the rotation pointing along `(x, y)`.
    ///
    /// The vector does not need to be normalized. A zero vector has no
    /// direction and yields the identity rotation.
    pub fn from_components(x: f64, y: f64) -> Self {
        let magnitude = x.hypot(y);
        if magnitude > 1e-6 {
            Self(UnitComplex::from_cos_sin_unchecked(
                x / magnitude,
                y / magnitude,
            ))
        } else {
            log::warn!("x and y components of rotation are zero, using identity");
            Self::identity()
        }
    }

    /// Angle in radians, in (-π, π].
    pub fn radians(&self) -> f64 {
        self.0.angle()
    }

    /// Angle in degrees, in (-180, 180].
    pub fn degrees(&self) -> f64 {
        self.radians().to_degrees()
    }

    pub fn cos(&self) -> f64 {
        self.0.cos_angle()
    }

    pub fn sin(&self) -> f64 {
        self.0.sin_angle()
    }

    pub fn tan(&self) -> f64 {
        self.sin() / self.cos()
    }

    /// Angle sum. Renormalizes so repeated composition does not drift off the
    /// unit circle.
    pub fn plus(&self, other: Rotation) -> Self {
        let product = self.0 * other.0;
        Self::from_components(product.cos_angle(), product.sin_angle())
    }

    /// Angle difference.
    pub fn minus(&self, other: Rotation) -> Self {
        self.plus(other.inverse())
    }

    pub fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    pub(crate) fn apply(&self, vector: Vector2<f64>) -> Vector2<f64> {
        self.0 * vector
    }

    pub fn as_unit_complex(&self) -> UnitComplex<f64> {
        self.0
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<UnitComplex<f64>> for Rotation {
    fn from(rotation: UnitComplex<f64>) -> Self {
        Self::from_components(rotation.cos_angle(), rotation.sin_angle())
    }
}

impl PartialEq for Rotation {
    fn eq(&self, other: &Self) -> bool {
        (self.cos() - other.cos()).hypot(self.sin() - other.sin()) < EPSILON
    }
}

impl Add for Rotation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Sub for Rotation {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.minus(rhs)
    }
}

impl Neg for Rotation {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl AbsDiffEq for Rotation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.cos().abs_diff_eq(&other.cos(), epsilon) && self.sin().abs_diff_eq(&other.sin(), epsilon)
    }
}

impl RelativeEq for Rotation {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.cos().relative_eq(&other.cos(), epsilon, max_relative)
            && self.sin().relative_eq(&other.sin(), epsilon, max_relative)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.degrees())
    }
}
