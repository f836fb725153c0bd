use core::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector2;

use super::{approx_eq, Rotation, EPSILON};

/// A displacement in the plane, in meters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Translation {
    pub vector: Vector2<f64>,
}

impl Translation {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            vector: Vector2::new(x, y),
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn from_polar(distance: f64, angle: Rotation) -> Self {
        Self::new(distance * angle.cos(), distance * angle.sin())
    }

    pub fn x(&self) -> f64 {
        self.vector.x
    }

    pub fn y(&self) -> f64 {
        self.vector.y
    }

    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        self.vector.metric_distance(&other.vector)
    }

    /// Direction of the vector from the origin. Identity for the zero vector.
    pub fn angle(&self) -> Rotation {
        Rotation::from_components(self.x(), self.y())
    }

    /// Rotates the vector counter-clockwise about the origin.
    pub fn rotate_by(&self, rotation: Rotation) -> Self {
        Self {
            vector: rotation.apply(self.vector),
        }
    }

    pub fn plus(&self, other: Translation) -> Self {
        *self + other
    }

    pub fn minus(&self, other: Translation) -> Self {
        *self - other
    }
}

impl From<Vector2<f64>> for Translation {
    fn from(vector: Vector2<f64>) -> Self {
        Self { vector }
    }
}

impl From<Translation> for Vector2<f64> {
    fn from(translation: Translation) -> Self {
        translation.vector
    }
}

impl PartialEq for Translation {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x(), other.x()) && approx_eq(self.y(), other.y())
    }
}

impl Add for Translation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            vector: self.vector + rhs.vector,
        }
    }
}

impl Sub for Translation {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            vector: self.vector - rhs.vector,
        }
    }
}

impl Neg for Translation {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            vector: -self.vector,
        }
    }
}

impl Mul<f64> for Translation {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            vector: self.vector * scalar,
        }
    }
}

impl Div<f64> for Translation {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            vector: self.vector / scalar,
        }
    }
}

impl AbsDiffEq for Translation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x().abs_diff_eq(&other.x(), epsilon) && self.y().abs_diff_eq(&other.y(), epsilon)
    }
}

impl RelativeEq for Translation {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x().relative_eq(&other.x(), epsilon, max_relative)
            && self.y().relative_eq(&other.y(), epsilon, max_relative)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_rotate_by_quarter_turns() {
        let corner = Translation::new(1.0, 1.0);
        assert_eq!(corner.rotate_by(Rotation::from_degrees(90.0)), Translation::new(-1.0, 1.0));
        assert_eq!(corner.rotate_by(Rotation::from_degrees(180.0)), Translation::new(-1.0, -1.0));
        assert_eq!(corner.rotate_by(Rotation::from_degrees(270.0)), Translation::new(1.0, -1.0));
        assert_eq!(corner.rotate_by(Rotation::identity()), corner);
    }

    #[test]
    fn test_rotate_by_keeps_length() {
        let offset = Translation::new(0.5, -1.0);
        let rotated = offset.rotate_by(Rotation::from_degrees(37.0));
        assert_relative_eq!(rotated.norm(), offset.norm(), epsilon = 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = Translation::new(3.0, 6.0);
        let b = Translation::new(0.5, -1.0);
        assert_eq!(a + b, Translation::new(3.5, 5.0));
        assert_eq!(a.plus(b), a + b);
        assert_eq!(a - b, Translation::new(2.5, 7.0));
        assert_eq!(a.minus(b), a - b);
        assert_eq!(-b, Translation::new(-0.5, 1.0));
        assert_eq!(b * 2.0, Translation::new(1.0, -2.0));
        assert_eq!(a / 3.0, Translation::new(1.0, 2.0));
    }

    #[test]
    fn test_polar_and_angle() {
        let translation = Translation::from_polar(2.0_f64.sqrt(), Rotation::from_degrees(45.0));
        assert_eq!(translation, Translation::new(1.0, 1.0));
        assert_relative_eq!(translation.angle().degrees(), 45.0, epsilon = 1e-9);
        assert_relative_eq!(
            Translation::new(3.0, 4.0).distance(&Translation::zero()),
            5.0,
            epsilon = 1e-12
        );
    }
}
