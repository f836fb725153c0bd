use core::{fmt, ops::Neg};

use approx::{AbsDiffEq, RelativeEq};

use super::{Pose, Rotation, Translation, EPSILON};

/// A relative move: a translation followed by a rotation, expressed in the
/// frame of the pose it is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub translation: Translation,
    pub rotation: Rotation,
}

impl Transform {
    pub fn new(translation: Translation, rotation: Rotation) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// The transform that moves `initial` onto `last`.
    pub fn between(initial: Pose, last: Pose) -> Self {
        Self {
            translation: (last.translation - initial.translation).rotate_by(-initial.rotation),
            rotation: last.rotation - initial.rotation,
        }
    }

    /// Undoes this transform.
    pub fn inverse(&self) -> Self {
        Self {
            translation: (-self.translation).rotate_by(-self.rotation),
            rotation: -self.rotation,
        }
    }
}

impl Neg for Transform {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl AbsDiffEq for Transform {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.translation.abs_diff_eq(&other.translation, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
    }
}

impl RelativeEq for Transform {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.translation
            .relative_eq(&other.translation, epsilon, max_relative)
            && self
                .rotation
                .relative_eq(&other.rotation, epsilon, max_relative)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform({}, {})", self.translation, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_recovers_transform() {
        let initial = Pose::new(1.0, 2.0, Rotation::from_degrees(90.0));
        let transform = Transform::new(Translation::new(2.0, 0.0), Rotation::from_degrees(-45.0));
        let last = initial.transform_by(transform);
        assert_eq!(last, Pose::new(1.0, 4.0, Rotation::from_degrees(45.0)));
        assert_eq!(Transform::between(initial, last), transform);
    }

    #[test]
    fn test_inverse_undoes_transform() {
        let pose = Pose::new(3.0, 6.0, Rotation::from_degrees(30.0));
        let transform = Transform::new(Translation::new(1.0, -0.5), Rotation::from_degrees(70.0));
        assert_eq!(pose.transform_by(transform).transform_by(-transform), pose);
    }
}
