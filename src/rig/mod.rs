//! The vignette's fixed cast: the node hierarchy and the camera cycle.

pub mod builder;
pub mod camera_rig;

pub use builder::{
    DETACHED_CAMERA_LABEL, Rig, TARGET_CAMERA_LABEL, TURRET_CAMERA_LABEL, VEHICLE_CAMERA_LABEL,
    build_rig,
};
pub use camera_rig::CameraRig;
