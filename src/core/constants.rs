use std::f32::consts::PI;

/// Scroll choreography tuning constants.
///
/// Keyframe and anchor tables are indexed by narrative section; both viewport
/// variants must keep the same length as `SECTION_COUNT`.
pub const SECTION_COUNT: usize = 5;

// Live pose smoothing (fraction of the remaining distance covered per frame)
pub const POSE_DAMPING_PER_FRAME: f32 = 0.06;

// Canvas placement tween
pub const PLACEMENT_TWEEN_MS: f64 = 1200.0;

// Viewport classification (matches `(max-width: 767px)`)
pub const MOBILE_MAX_WIDTH_PX: f64 = 767.0;

// Render scale rule: min(visible_width * factor, cap)
pub const DESKTOP_SCALE_FACTOR: f32 = 0.14;
pub const DESKTOP_SCALE_CAP: f32 = 0.8;
pub const MOBILE_SCALE_FACTOR: f32 = 0.2;
pub const MOBILE_SCALE_CAP: f32 = 0.7;

// Fixed wrapper size per viewport class (vw x vh)
pub const DESKTOP_WRAPPER_WIDTH_VW: f32 = 50.0;
pub const MOBILE_WRAPPER_WIDTH_VW: f32 = 100.0;
pub const WRAPPER_HEIGHT_VH: f32 = 100.0;

// Camera
pub const CAMERA_Z: f32 = 9.0;
pub const CAMERA_FOVY_DEG: f32 = 40.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Drag-to-orbit: azimuth is free, polar angle stays within this margin of the horizon
pub const ORBIT_POLAR_MARGIN: f32 = 0.25;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

// Section trigger window, as fractions of the viewport height from its top
pub const TRIGGER_START_FRACTION: f64 = 0.6; // section top must reach this line
pub const TRIGGER_END_FRACTION: f64 = 0.4; // section bottom must stay below this line

// Poses per section: [yaw, pitch, roll, vertical offset]
pub const DESKTOP_POSES: [[f32; 4]; SECTION_COUNT] = [
    [0.0, PI / 2.0, 0.0, 0.0], // lying flat, charging port to the viewer
    [PI * 1.3, 0.1, 0.0, 0.0], // angled back and side
    [PI * 2.5, 0.0, 0.0, 0.0], // front display
    [PI * 2.5, 0.2, 0.0, -0.3], // slight tilt
    [PI * 1.75, 0.15, 0.0, 0.0], // three-quarter angle
];

pub const MOBILE_POSES: [[f32; 4]; SECTION_COUNT] = [
    [0.0, PI / 2.0, 0.0, 0.6],
    [PI * 1.3, 0.1, 0.0, 0.6],
    [PI * 2.5, 0.0, 0.0, 0.6],
    [PI * 2.5, 0.2, 0.0, 0.4],
    [PI * 1.75, 0.15, 0.0, 0.6],
];

// Canvas anchors per section: [top (vh), left (%), horizontal centering (%)]
pub const DESKTOP_ANCHORS: [[f32; 3]; SECTION_COUNT] = [
    [0.0, 50.0, -50.0], // centered
    [10.0, 65.0, -50.0], // right, copy on the left
    [10.0, 20.0, -50.0], // left, copy on the right
    [10.0, 65.0, -50.0],
    [10.0, 20.0, -50.0],
];

pub const MOBILE_ANCHORS: [[f32; 3]; SECTION_COUNT] = [[0.0, 50.0, -50.0]; SECTION_COUNT];
