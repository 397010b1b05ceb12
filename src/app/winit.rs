//! Winit-based desktop host.
//!
//! Opens one window and runs the frame loop on it:
//!
//! - the window's inner size is the displayed size, polled every frame
//! - the backing store is tracked by [`WindowSurface`] and follows the
//!   displayed size when the engine reconciles
//! - the window title is the status display
//! - a redraw is requested after each frame returns
//!
//! # Example
//!
//! ```rust,ignore
//! use vignette::app::winit::App;
//! use vignette::render::TraceRenderer;
//!
//! fn main() -> vignette::errors::Result<()> {
//!     App::new().with_title("Tank").run(TraceRenderer::new())
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::animation::AnimationClock;
use crate::app::{StatusDisplay, Viewport};
use crate::config::VignetteSettings;
use crate::engine::Engine;
use crate::errors::{Result, VignetteError};
use crate::render::Renderer;
use crate::utils::FpsCounter;

/// Application builder for the desktop host.
pub struct App {
    title: String,
    settings: VignetteSettings,
}

impl App {
    /// Creates a new application builder with the reference settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: "Tank Vignette".into(),
            settings: VignetteSettings::default(),
        }
    }

    /// Sets the window title shown before the active camera's label.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: VignetteSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Runs the vignette until the window is closed.
    ///
    /// Blocks the current thread. Startup failures inside the event loop
    /// (window creation, invalid settings) stop the loop and are returned.
    pub fn run<R: Renderer + 'static>(self, renderer: R) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut runner = AppRunner::new(self.title, self.settings, renderer);
        event_loop.run_app(&mut runner)?;

        match runner.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Window as a [`Viewport`]: inner size displayed, backing size tracked.
struct WindowSurface {
    window: Arc<Window>,
    backing: (u32, u32),
}

impl Viewport for WindowSurface {
    fn display_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn backing_size(&self) -> (u32, u32) {
        self.backing
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.backing = (width, height);
    }
}

/// Window title as a [`StatusDisplay`].
struct WindowStatus {
    window: Arc<Window>,
    base_title: String,
    shown: String,
}

impl StatusDisplay for WindowStatus {
    fn set_text(&mut self, text: &str) {
        if self.shown != text {
            self.shown.clear();
            self.shown.push_str(text);
            self.window.set_title(&format!("{} - {text}", self.base_title));
        }
    }
}

struct AppRunner<R: Renderer> {
    title: String,
    settings: VignetteSettings,
    renderer: R,

    engine: Option<Engine>,
    surface: Option<WindowSurface>,
    status: Option<WindowStatus>,

    clock: AnimationClock,
    start_time: Instant,
    fps: FpsCounter,

    fatal: Option<VignetteError>,
}

impl<R: Renderer> AppRunner<R> {
    fn new(title: String, settings: VignetteSettings, renderer: R) -> Self {
        Self {
            title,
            settings,
            renderer,
            engine: None,
            surface: None,
            status: None,
            clock: AnimationClock::new(),
            start_time: Instant::now(),
            fps: FpsCounter::new(),
            fatal: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let engine = Engine::new(self.settings.clone())?;

        self.status = Some(WindowStatus {
            window: window.clone(),
            base_title: self.title.clone(),
            shown: String::new(),
        });
        self.surface = Some(WindowSurface {
            window,
            backing: (0, 0),
        });
        self.engine = Some(engine);
        self.start_time = Instant::now();
        Ok(())
    }

    fn redraw(&mut self) {
        let (Some(engine), Some(surface)) = (&mut self.engine, &mut self.surface) else {
            return;
        };

        let now = self.start_time.elapsed().as_secs_f64();
        let state = self.clock.advance(now);
        let status = self.status.as_mut().map(|s| s as &mut dyn StatusDisplay);
        engine.frame(state, surface, status, &mut self.renderer);

        if let Some(fps) = self.fps.tick(now) {
            log::debug!("{fps:.1} fps over {} frames", engine.frame_count());
        }

        surface.window.request_redraw();
    }
}

impl<R: Renderer> ApplicationHandler for AppRunner<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }

        log::info!("Creating window '{}'", self.title);
        if let Err(err) = self.init(event_loop) {
            log::error!("Fatal startup error: {err}");
            self.fatal = Some(err);
            event_loop.exit();
            return;
        }

        if let Some(surface) = &self.surface {
            surface.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed after {} frames", self.clock.frame_count());
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }
}
