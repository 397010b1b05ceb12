//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The per-frame animation core is total: once a [`Rig`](crate::rig::Rig) has
//! been built, nothing inside a frame can fail. Errors therefore only surface
//! at startup:
//! - Invalid settings or a degenerate path
//! - Scene construction against a missing parent
//! - Host failures (event loop, window, browser DOM)
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, VignetteError>`.
//!
//! ```rust,ignore
//! use vignette::errors::Result;
//! use vignette::{Engine, VignetteSettings};
//!
//! fn start() -> Result<Engine> {
//!     Engine::new(VignetteSettings::default())
//! }
//! ```

use thiserror::Error;

/// The main error type for the crate.
#[derive(Error, Debug)]
pub enum VignetteError {
    // ========================================================================
    // Construction Errors
    // ========================================================================
    /// A closed path needs at least three distinct control points.
    #[error("Degenerate path: {distinct} distinct control point(s), at least 3 required")]
    DegeneratePath {
        /// Number of distinct control points that were supplied
        distinct: usize,
    },

    /// A settings value is out of range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// A node handle did not resolve to a live node.
    #[error("Scene node not found: {0}")]
    NodeNotFound(String),

    // ========================================================================
    // Platform-Specific Errors
    // ========================================================================
    /// Event loop error (winit).
    #[cfg(all(feature = "winit", not(target_arch = "wasm32")))]
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window creation error (winit).
    #[cfg(all(feature = "winit", not(target_arch = "wasm32")))]
    #[error("Window creation error: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    /// Browser/DOM error.
    #[cfg(target_arch = "wasm32")]
    #[error("Web error: {0}")]
    Web(String),
}

/// Alias for `Result<T, VignetteError>`.
pub type Result<T> = std::result::Result<T, VignetteError>;
