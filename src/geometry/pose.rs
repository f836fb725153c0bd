use core::{
    fmt,
    ops::{Add, Sub},
};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::{Isometry2, Translation2, Vector3};

use super::{Rotation, Transform, Translation, EPSILON};

/// Where something sits in a frame and which way it faces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub translation: Translation,
    pub rotation: Rotation,
}

impl Pose {
    pub fn new(x: f64, y: f64, rotation: Rotation) -> Self {
        Self {
            translation: Translation::new(x, y),
            rotation,
        }
    }

    pub fn from_parts(translation: Translation, rotation: Rotation) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// The origin, facing along +x.
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    pub fn y(&self) -> f64 {
        self.translation.y()
    }

    /// Applies `transform` in this pose's own frame: the transform's
    /// translation is rotated into the parent frame before it is added.
    pub fn transform_by(&self, transform: Transform) -> Self {
        Self {
            translation: transform.translation.rotate_by(self.rotation) + self.translation,
            rotation: self.rotation + transform.rotation,
        }
    }

    /// Expresses this pose in the frame of `origin`.
    pub fn relative_to(&self, origin: Pose) -> Self {
        let transform = Transform::between(origin, *self);
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }

    pub fn distance_to(&self, pose: &Self) -> f64 {
        self.translation.distance(&pose.translation)
    }
}

impl Add<Transform> for Pose {
    type Output = Self;

    fn add(self, rhs: Transform) -> Self {
        self.transform_by(rhs)
    }
}

impl Sub for Pose {
    type Output = Transform;

    /// The transform that takes `rhs` to `self`.
    fn sub(self, rhs: Self) -> Transform {
        Transform::between(rhs, self)
    }
}

impl From<Vector3<f64>> for Pose {
    fn from(vector: Vector3<f64>) -> Self {
        Pose::new(vector.x, vector.y, Rotation::from_radians(vector.z))
    }
}

impl From<Pose> for Vector3<f64> {
    fn from(pose: Pose) -> Self {
        Vector3::new(pose.x(), pose.y(), pose.rotation.radians())
    }
}

impl From<Isometry2<f64>> for Pose {
    fn from(isometry: Isometry2<f64>) -> Self {
        Self {
            translation: Translation::from(isometry.translation.vector),
            rotation: Rotation::from(isometry.rotation),
        }
    }
}

impl From<Pose> for Isometry2<f64> {
    fn from(pose: Pose) -> Self {
        Isometry2::from_parts(
            Translation2::new(pose.x(), pose.y()),
            pose.rotation.as_unit_complex(),
        )
    }
}

impl AbsDiffEq for Pose {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.translation.abs_diff_eq(&other.translation, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
    }
}

impl RelativeEq for Pose {
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

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pose(x: {:.3}, y: {:.3}, heading: {})",
            self.x(),
            self.y(),
            self.rotation
        )
    }
}
