use super::FieldSink;
use crate::geometry::Pose;

/// Writes every published pose to the `log` facade instead of drawing it.
#[derive(Clone, Copy, Debug)]
pub struct LogField {
    pub level: log::Level,
}

impl LogField {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogField {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl FieldSink for LogField {
    fn set_pose(&mut self, name: &str, pose: Pose) {
        log::log!(target: "field", self.level, "{name}: {pose}");
    }
}
