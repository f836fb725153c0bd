//! Planar geometry used to place objects on the field.
//!
//! Angles are counter-clockwise positive, x is forward and y is left.

pub mod pose;
pub mod rotation;
pub mod transform;
pub mod translation;

pub use pose::Pose;
pub use rotation::Rotation;
pub use transform::Transform;
pub use translation::Translation;

/// Absolute tolerance used by the `PartialEq` impls of the geometry types.
pub const EPSILON: f64 = 1e-9;

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    num_traits::Float::abs(a - b) < EPSILON
}
