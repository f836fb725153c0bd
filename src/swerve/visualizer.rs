use alloc::boxed::Box;

use super::layout::{ModulePosition, SwerveLayout};
use crate::{
    field::{FieldObject, FieldSink},
    geometry::{Pose, Rotation, Transform, Translation},
};

/// Revolves an object about `origin`, keeping its offset and heading relative
/// to the origin.
///
/// `relative_offset` is where the object sits in the origin's frame and
/// `local_rotation` is its heading measured from the origin's heading.
pub fn revolve_object(relative_offset: Translation, origin: Pose, local_rotation: Rotation) -> Pose {
    let delta = Transform::new(relative_offset, local_rotation);
    Pose::from_parts(
        delta.translation.rotate_by(origin.rotation) + origin.translation,
        origin.rotation + delta.rotation,
    )
}

/// Field-frame poses produced by one update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelPoseSet {
    pub front_left: Pose,
    pub front_right: Pose,
    pub back_left: Pose,
    pub back_right: Pose,
    pub chassis: Pose,
}

impl WheelPoseSet {
    pub fn wheel(&self, module: ModulePosition) -> Pose {
        match module {
            ModulePosition::FrontLeft => self.front_left,
            ModulePosition::FrontRight => self.front_right,
            ModulePosition::BackLeft => self.back_left,
            ModulePosition::BackRight => self.back_right,
        }
    }

    /// Every pose with the object it belongs to, wheels first and the chassis
    /// last.
    pub fn iter(&self) -> impl Iterator<Item = (FieldObject, Pose)> + '_ {
        ModulePosition::ALL
            .into_iter()
            .map(|module| (module.field_object(), self.wheel(module)))
            .chain(core::iter::once((FieldObject::RobotBase, self.chassis)))
    }
}

/// Draws a four-module swerve drive onto a field.
///
/// Module offsets are fixed when the visualizer is built. Each update places
/// the wheels around the chassis pose and publishes all five objects to the
/// sink, replacing whatever was drawn before.
#[derive(Clone)]
pub struct SwerveVisualizer {
    layout: SwerveLayout,
    offsets: [Translation; 4],
    field: Box<dyn FieldSink>,
}

impl SwerveVisualizer {
    /// Builds the visualizer and publishes the drive at the origin with all
    /// wheels straight.
    pub fn new(layout: SwerveLayout, field: Box<dyn FieldSink>) -> Self {
        let offsets = layout.offsets();
        log::debug!(
            "swerve layout {} x {} m, offsets fl {} fr {} bl {} br {}",
            layout.width_meters,
            layout.length_meters,
            offsets[0],
            offsets[1],
            offsets[2],
            offsets[3]
        );

        let mut visualizer = Self {
            layout,
            offsets,
            field,
        };
        visualizer.update(
            Rotation::identity(),
            Rotation::identity(),
            Rotation::identity(),
            Rotation::identity(),
            Pose::identity(),
        );
        visualizer
    }

    pub fn layout(&self) -> SwerveLayout {
        self.layout
    }

    pub fn offset(&self, module: ModulePosition) -> Translation {
        self.offsets[module as usize]
    }

    /// Places the wheels without publishing anything.
    pub fn compute(
        &self,
        front_left: Rotation,
        front_right: Rotation,
        back_left: Rotation,
        back_right: Rotation,
        chassis: Pose,
    ) -> WheelPoseSet {
        let place = |module: ModulePosition, heading: Rotation| {
            revolve_object(self.offset(module), chassis, heading)
        };
        WheelPoseSet {
            front_left: place(ModulePosition::FrontLeft, front_left),
            front_right: place(ModulePosition::FrontRight, front_right),
            back_left: place(ModulePosition::BackLeft, back_left),
            back_right: place(ModulePosition::BackRight, back_right),
            chassis,
        }
    }

    /// Places the wheels around `chassis` and publishes them, then the
    /// chassis itself.
    ///
    /// Wheel headings are relative to the chassis heading.
    pub fn update(
        &mut self,
        front_left: Rotation,
        front_right: Rotation,
        back_left: Rotation,
        back_right: Rotation,
        chassis: Pose,
    ) -> WheelPoseSet {
        let poses = self.compute(front_left, front_right, back_left, back_right, chassis);
        for (object, pose) in poses.iter() {
            self.field.set_pose(object.name(), pose);
        }
        log::trace!("published swerve poses, chassis {}", poses.chassis);
        poses
    }
}
