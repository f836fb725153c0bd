use bon::Builder;

use crate::{field::FieldObject, geometry::Translation};

/// Corner module positions of a four-module swerve drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModulePosition {
    FrontLeft = 0,
    FrontRight = 1,
    BackLeft = 2,
    BackRight = 3,
}

impl ModulePosition {
    pub const ALL: [ModulePosition; 4] = [
        ModulePosition::FrontLeft,
        ModulePosition::FrontRight,
        ModulePosition::BackLeft,
        ModulePosition::BackRight,
    ];

    pub const fn field_object(&self) -> FieldObject {
        match self {
            ModulePosition::FrontLeft => FieldObject::FrontLeftWheel,
            ModulePosition::FrontRight => FieldObject::FrontRightWheel,
            ModulePosition::BackLeft => FieldObject::BackLeftWheel,
            ModulePosition::BackRight => FieldObject::BackRightWheel,
        }
    }
}

/// Module spacing of the drive, in meters.
///
/// Zero and negative values are accepted as given. Zero collapses modules onto
/// an axis, a negative value mirrors the layout across it.
#[derive(Clone, Copy, Debug, PartialEq, Builder)]
pub struct SwerveLayout {
    /// Distance between the left and right modules.
    pub width_meters: f64,

    /// Distance between the front and back modules.
    pub length_meters: f64,
}

impl SwerveLayout {
    pub fn new(width_meters: f64, length_meters: f64) -> Self {
        Self {
            width_meters,
            length_meters,
        }
    }

    /// Where `module` sits relative to the robot's center, x forward and
    /// y left.
    pub fn offset(&self, module: ModulePosition) -> Translation {
        let half_length = self.length_meters / 2.0;
        let half_width = self.width_meters / 2.0;
        match module {
            ModulePosition::FrontLeft => Translation::new(half_length, half_width),
            ModulePosition::FrontRight => Translation::new(half_length, -half_width),
            ModulePosition::BackLeft => Translation::new(-half_length, half_width),
            ModulePosition::BackRight => Translation::new(-half_length, -half_width),
        }
    }

    /// All four offsets, indexed by `ModulePosition as usize`.
    pub fn offsets(&self) -> [Translation; 4] {
        ModulePosition::ALL.map(|module| self.offset(module))
    }
}

#[macro_export]
macro_rules! swerve_layout {
    (
        $($key:ident : $value:expr),* $(,)?
    ) => {
        $crate::swerve::layout::SwerveLayout::builder()
            $(.$key($value))*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_offsets() {
        let layout = SwerveLayout::new(2.0, 2.0);
        assert_eq!(
            layout.offsets(),
            [
                Translation::new(1.0, 1.0),
                Translation::new(1.0, -1.0),
                Translation::new(-1.0, 1.0),
                Translation::new(-1.0, -1.0),
            ]
        );
    }

    #[test]
    fn test_rectangle_offsets_use_length_for_x() {
        let layout = SwerveLayout::builder()
            .width_meters(1.0)
            .length_meters(6.0)
            .build();
        assert_eq!(layout.offset(ModulePosition::FrontLeft), Translation::new(3.0, 0.5));
        assert_eq!(layout.offset(ModulePosition::BackRight), Translation::new(-3.0, -0.5));
    }

    #[test]
    fn test_macro_matches_builder() {
        let layout = swerve_layout!(width_meters: 2.0, length_meters: 1.0);
        assert_eq!(layout, SwerveLayout::new(2.0, 1.0));
    }

    #[test]
    fn test_degenerate_and_mirrored_layouts() {
        let collapsed = SwerveLayout::new(0.0, 0.0);
        for module in ModulePosition::ALL {
            assert_eq!(collapsed.offset(module), Translation::zero());
        }

        let mirrored = SwerveLayout::new(-2.0, 2.0);
        assert_eq!(mirrored.offset(ModulePosition::FrontLeft), Translation::new(1.0, -1.0));
        assert_eq!(mirrored.offset(ModulePosition::FrontRight), Translation::new(1.0, 1.0));
    }

    #[test]
    fn test_module_field_objects() {
        assert_eq!(ModulePosition::FrontLeft.field_object().name(), "frontLeftWheel");
        assert_eq!(ModulePosition::BackRight.field_object().name(), "backRightWheel");
    }
}
