#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod app;
pub mod config;
pub mod engine;
pub mod errors;
pub mod render;
pub mod resources;
pub mod rig;
pub mod scene;
pub mod utils;

pub use animation::{AnimationClock, AnimationDriver, AnimationState, Path};
pub use app::{FixedViewport, StatusDisplay, Viewport};
pub use config::{CameraSettings, Choreography, RigDimensions, VignetteSettings};
pub use engine::{Engine, FrameState};
pub use errors::{Result, VignetteError};
pub use render::{Renderer, TraceRenderer};
pub use resources::{Color, Material, Mesh, Primitive};
pub use rig::{CameraRig, Rig};
pub use scene::{Camera, Light, Node, NodeHandle, Scene, Transform};

#[cfg(all(feature = "winit", not(target_arch = "wasm32")))]
pub use app::winit::App;
