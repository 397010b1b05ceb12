//! Procedural animation.
//!
//! - [`Path`]: closed Catmull-Rom spline on the ground plane
//! - [`AnimationClock`] / [`AnimationState`]: elapsed time, the only input to motion
//! - [`AnimationDriver`]: per-frame mutation of the rig's local transforms

pub mod clock;
pub mod driver;
pub mod path;

pub use clock::{AnimationClock, AnimationState};
pub use driver::AnimationDriver;
pub use path::Path;
