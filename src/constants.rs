// Page wiring and render tuning used by the web frontend.

// DOM hooks
pub const ROOT_ID: &str = "showcase"; // scroll container holding the sections
pub const STAGE_WRAPPER_ID: &str = "stage-wrapper"; // fixed element that gets repositioned
pub const STAGE_CANVAS_ID: &str = "stage-canvas";
pub const SECTION_SELECTOR: &str = "section";

// Phone body in model units: width, height, depth
pub const PHONE_SIZE: [f32; 3] = [3.0, 6.3, 0.33];
// Camera plateau on the back, relative to the body's top-left corner
pub const CAMERA_BUMP_SIZE: [f32; 3] = [1.3, 1.3, 0.08];
pub const CAMERA_BUMP_INSET: f32 = 0.2;

// Palette (linear RGB)
pub const BODY_COLOR: [f32; 3] = [0.62, 0.62, 0.66]; // titanium
pub const SCREEN_COLOR: [f32; 3] = [0.015, 0.015, 0.02];
pub const BUMP_COLOR: [f32; 3] = [0.35, 0.35, 0.38];

// Lighting: direction the light comes from, and its weight
pub const KEY_LIGHT_DIR: [f32; 3] = [3.0, 8.0, 5.0];
pub const KEY_LIGHT_WEIGHT: f32 = 0.75;
pub const FILL_LIGHT_DIR: [f32; 3] = [-3.0, 4.0, -3.0];
pub const FILL_LIGHT_WEIGHT: f32 = 0.25;
pub const UNDER_LIGHT_DIR: [f32; 3] = [0.0, -4.0, 3.0];
pub const UNDER_LIGHT_WEIGHT: f32 = 0.15;
pub const AMBIENT_LIGHT: f32 = 0.3;

// Transparent clear so page copy shows through
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
