use std::{sync::Mutex, time::Duration};

use log::LevelFilter;
use swerve_visualizer::{
    field::{FieldSink, LogField, SharedField},
    geometry::{Pose, Rotation},
    logger::SerialLogger,
    swerve::{SwerveLayout, SwerveVisualizer},
};

static LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn write(line: &str) {
    LINES.lock().unwrap().push(line.to_owned());
}

fn clock() -> Duration {
    Duration::from_millis(61_250)
}

static LOGGER: SerialLogger = SerialLogger::new(write, clock);

// Installing a logger is process-wide, so everything that inspects log output
// lives in this one test.
#[test]
fn test_visualizer_logs_through_serial_logger() {
    LOGGER.init(LevelFilter::Trace).unwrap();

    let field = SharedField::new();
    let sinks: Vec<Box<dyn FieldSink>> = vec![Box::new(field.clone()), Box::new(LogField::default())];
    let mut visualizer = SwerveVisualizer::new(SwerveLayout::new(2.0, 1.0), Box::new(sinks));
    visualizer.update(
        Rotation::from_degrees(20.0),
        Rotation::identity(),
        Rotation::identity(),
        Rotation::identity(),
        Pose::new(3.0, 6.0, Rotation::identity()),
    );
    let _ = Rotation::from_components(0.0, 0.0);

    let lines = LINES.lock().unwrap();
    let has = |needle: &str| lines.iter().any(|line| line.contains(needle));

    assert!(has("01:01:250 \x1B[36m[DEBUG]\x1B[0m swerve layout 2 x 1 m"));
    assert!(has("\x1B[34m[INFO]\x1B[0m robotBase: Pose(x: 0.000, y: 0.000, heading: 0.00°)"));
    assert!(has("[INFO]\x1B[0m frontLeftWheel: Pose(x: 3.500, y: 7.000, heading: 20.00°)"));
    assert!(has("[TRACE]\x1B[0m published swerve poses"));
    assert!(has("\x1B[33m[WARN]\x1B[0m x and y components of rotation are zero"));

    // Both sinks saw the update.
    assert_eq!(
        field.pose("frontLeftWheel"),
        Some(Pose::new(3.5, 7.0, Rotation::from_degrees(20.0)))
    );
}
