//! Host glue.
//!
//! The frame loop only sees a host through two small traits:
//!
//! - [`Viewport`]: the drawing surface, polled once per frame for its
//!   displayed size and resized when the backing store lags behind
//! - [`StatusDisplay`]: an optional single-line text sink for the active
//!   camera's label
//!
//! Back-ends:
//! - [`winit`]: desktop window (feature `winit`)
//! - [`web`]: browser canvas driven by `requestAnimationFrame` (`wasm32`)

#[cfg(all(feature = "winit", not(target_arch = "wasm32")))]
pub mod winit;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Drawing surface with a displayed size and a separate backing store.
pub trait Viewport {
    /// Size the surface is shown at, in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Size of the pixel buffer the renderer draws into.
    fn backing_size(&self) -> (u32, u32);

    fn resize_backing(&mut self, width: u32, height: u32);
}

/// Receives the active camera's label once per frame.
pub trait StatusDisplay {
    fn set_text(&mut self, text: &str);
}

impl StatusDisplay for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// In-memory viewport for headless hosts, tests and benchmarks.
///
/// The displayed size is set by the host; the backing store follows it
/// only when the engine reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport {
    display: (u32, u32),
    backing: (u32, u32),
}

impl FixedViewport {
    /// A viewport whose backing store does not match yet, like a freshly
    /// created canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            display: (width, height),
            backing: (0, 0),
        }
    }

    /// Simulates the host resizing the displayed surface.
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.display = (width, height);
    }
}

impl Viewport for FixedViewport {
    fn display_size(&self) -> (u32, u32) {
        self.display
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }
}
