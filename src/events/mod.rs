pub mod media;
pub mod pointer;
pub mod registration;
pub mod scroll;

pub use media::{current_class, wire_viewport_class};
pub use pointer::{wire_orbit_drag, SharedOrbit};
pub use registration::Registrations;
pub use scroll::{dispatch, wire_scroll, SharedStage, SharedTriggers, TriggerSet};
