pub mod camera;
pub mod constants;
pub mod error;
pub mod orbit;
pub mod placement;
pub mod pose;
pub mod scroll;
pub mod stage;
pub mod tween;
pub mod viewport;

pub use camera::Camera;
pub use error::{ConfigError, ConfigResult};
pub use orbit::{Orbit, OrbitDrag};
pub use placement::{Anchor, ElementMover, MoveRequest};
pub use pose::Pose;
pub use scroll::{
    page_progress, ClassTracker, Direction, ScrollListener, SectionSpan, SectionTracker,
    TriggerWindow,
};
pub use stage::{Stage, StageConfig};
pub use tween::{Ease, TweenSlot};
pub use viewport::{ViewportClass, WrapperSize, MOBILE_MEDIA_QUERY};

// Shaders bundled as string constants
pub static STAGE_WGSL: &str = include_str!("../../shaders/stage.wgsl");
