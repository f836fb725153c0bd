#[macro_use]
pub mod layout;
pub mod visualizer;

pub use layout::{ModulePosition, SwerveLayout};
pub use visualizer::{revolve_object, SwerveVisualizer, WheelPoseSet};
