//! Browser host.
//!
//! Drives the frame loop from `requestAnimationFrame` on a canvas element:
//!
//! - canvas `clientWidth`/`clientHeight` is the displayed size
//! - canvas `width`/`height` is the backing store
//! - the status element, if present, has its text content replaced
//! - the next frame is requested after the current one has drawn

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::animation::AnimationClock;
use crate::app::{StatusDisplay, Viewport};
use crate::config::VignetteSettings;
use crate::engine::Engine;
use crate::errors::{Result, VignetteError};
use crate::render::{Renderer, TraceRenderer};
use crate::utils::FpsCounter;

/// Canvas element as a [`Viewport`].
pub struct CanvasViewport {
    canvas: web::HtmlCanvasElement,
}

impl CanvasViewport {
    #[must_use]
    pub fn new(canvas: web::HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl Viewport for CanvasViewport {
    fn display_size(&self) -> (u32, u32) {
        (
            self.canvas.client_width().max(0) as u32,
            self.canvas.client_height().max(0) as u32,
        )
    }

    fn backing_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize_backing(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

/// DOM element whose text content shows the status line.
pub struct ElementStatus {
    element: web::Element,
}

impl ElementStatus {
    #[must_use]
    pub fn new(element: web::Element) -> Self {
        Self { element }
    }
}

impl StatusDisplay for ElementStatus {
    fn set_text(&mut self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}

fn js_error(context: &str, value: &JsValue) -> VignetteError {
    VignetteError::Web(format!("{context}: {value:?}"))
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(window: &web::Window, callback: &FrameCallback) {
    if let Some(closure) = callback.borrow().as_ref()
        && let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref())
    {
        log::error!("requestAnimationFrame failed: {err:?}");
    }
}

/// Starts the frame loop on the canvas `canvas_id`.
///
/// A missing status element is tolerated; a missing canvas is not.
pub fn start<R: Renderer + 'static>(
    canvas_id: &str,
    status_id: Option<&str>,
    settings: VignetteSettings,
    renderer: R,
) -> Result<()> {
    let window = web::window().ok_or_else(|| VignetteError::Web("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| VignetteError::Web("no document".into()))?;

    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| VignetteError::Web(format!("missing #{canvas_id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|el| js_error("not a canvas", &el.into()))?;

    let status = status_id
        .and_then(|id| document.get_element_by_id(id))
        .map(ElementStatus::new);
    if status.is_none() {
        log::info!("No status element, camera labels will not be shown");
    }

    let mut engine = Engine::new(settings)?;
    let mut viewport = CanvasViewport::new(canvas);
    let mut status = status;
    let mut renderer = renderer;
    let mut clock = AnimationClock::new();
    let mut fps = FpsCounter::new();

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        let state = clock.advance_millis(timestamp_ms);
        let status = status.as_mut().map(|s| s as &mut dyn StatusDisplay);
        engine.frame(state, &mut viewport, status, &mut renderer);

        if let Some(rate) = fps.tick(timestamp_ms * 0.001) {
            log::debug!("{rate:.1} fps");
        }

        request_frame(&frame_window, &next);
    }) as Box<dyn FnMut(f64)>));

    request_frame(&window, &callback);
    log::info!("Frame loop started on #{canvas_id}");
    Ok(())
}

/// Page entry point: installs the console logger and panic hook, then runs
/// the reference vignette with a logging renderer.
#[wasm_bindgen]
pub fn run_vignette(canvas_id: &str, status_id: &str) -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    start(
        canvas_id,
        Some(status_id),
        VignetteSettings::default(),
        TraceRenderer::new(),
    )
    .map_err(|err| JsValue::from_str(&err.to_string()))
}
