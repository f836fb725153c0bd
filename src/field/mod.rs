//! Destinations for published poses.
//!
//! Anything that can take a named pose is a [`FieldSink`]. The visualizer
//! only ever writes to its sink; reading poses back is up to whoever owns the
//! concrete sink.

pub mod log_field;

use alloc::{
    boxed::Box,
    collections::BTreeMap,
    rc::Rc,
    string::{String, ToString},
    vec::Vec,
};
use core::cell::RefCell;

pub use log_field::LogField;

use crate::geometry::Pose;

dyn_clone::clone_trait_object!(FieldSink);

pub trait FieldSink: dyn_clone::DynClone {
    /// Replaces the pose of the object called `name`, creating it if needed.
    fn set_pose(&mut self, name: &str, pose: Pose);
}

/// Publishes to every sink in order.
impl FieldSink for Vec<Box<dyn FieldSink>> {
    fn set_pose(&mut self, name: &str, pose: Pose) {
        for sink in self.iter_mut() {
            sink.set_pose(name, pose);
        }
    }
}

/// The objects a swerve visualizer draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldObject {
    RobotBase,
    FrontLeftWheel,
    FrontRightWheel,
    BackLeftWheel,
    BackRightWheel,
}

impl FieldObject {
    pub const ALL: [FieldObject; 5] = [
        FieldObject::RobotBase,
        FieldObject::FrontLeftWheel,
        FieldObject::FrontRightWheel,
        FieldObject::BackLeftWheel,
        FieldObject::BackRightWheel,
    ];

    /// Name the object is published under.
    pub const fn name(&self) -> &'static str {
        match self {
            FieldObject::RobotBase => "robotBase",
            FieldObject::FrontLeftWheel => "frontLeftWheel",
            FieldObject::FrontRightWheel => "frontRightWheel",
            FieldObject::BackLeftWheel => "backLeftWheel",
            FieldObject::BackRightWheel => "backRightWheel",
        }
    }
}

/// In-memory registry of named poses, the latest write wins.
#[derive(Clone, Debug, Default)]
pub struct Field {
    objects: BTreeMap<String, Pose>,
}

impl Field {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self, name: &str) -> Option<Pose> {
        self.objects.get(name).copied()
    }

    pub fn object_pose(&self, object: FieldObject) -> Option<Pose> {
        self.pose(object.name())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Pose)> {
        self.objects.iter().map(|(name, pose)| (name.as_str(), *pose))
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

impl FieldSink for Field {
    fn set_pose(&mut self, name: &str, pose: Pose) {
        match self.objects.get_mut(name) {
            Some(current) => *current = pose,
            None => {
                self.objects.insert(name.to_string(), pose);
            }
        }
    }
}

/// A [`Field`] behind a shared handle.
///
/// Clones point at the same registry, so one clone can be handed to a
/// visualizer while another is kept to read poses back. Single-threaded.
#[derive(Clone, Debug, Default)]
pub struct SharedField(Rc<RefCell<Field>>);

impl SharedField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self, name: &str) -> Option<Pose> {
        self.0.borrow().pose(name)
    }

    pub fn object_pose(&self, object: FieldObject) -> Option<Pose> {
        self.0.borrow().object_pose(object)
    }

    /// Copy of the registry as it is now.
    pub fn snapshot(&self) -> Field {
        self.0.borrow().clone()
    }
}

impl FieldSink for SharedField {
    fn set_pose(&mut self, name: &str, pose: Pose) {
        self.0.borrow_mut().set_pose(name, pose);
    }
}
