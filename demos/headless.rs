//! Runs the vignette without a window for ten simulated seconds at 60 fps,
//! logging camera switches and resizes.
//!
//! ```text
//! RUST_LOG=debug cargo run --example headless
//! ```

use vignette::animation::AnimationClock;
use vignette::app::FixedViewport;
use vignette::render::TraceRenderer;
use vignette::{Engine, VignetteSettings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut engine = Engine::new(VignetteSettings::default())?;
    let mut viewport = FixedViewport::new(800, 600);
    let mut renderer = TraceRenderer::new();
    let mut clock = AnimationClock::new();
    let mut status = String::new();

    for frame in 0..600_u32 {
        // Halfway through, the host window gets wider.
        if frame == 300 {
            viewport.set_display_size(1200, 600);
        }

        let state = clock.advance(f64::from(frame) / 60.0);
        engine.frame(state, &mut viewport, Some(&mut status), &mut renderer);
    }

    log::info!(
        "Ran {} frames, last camera: {status}, render target {:?}",
        renderer.frames(),
        renderer.size()
    );
    Ok(())
}
