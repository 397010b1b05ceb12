//! Opens a window and runs the vignette; the title shows the active camera.
//!
//! ```text
//! RUST_LOG=debug cargo run --example windowed
//! ```

use vignette::App;
use vignette::render::TraceRenderer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    App::new().with_title("Tank Vignette").run(TraceRenderer::new())?;
    Ok(())
}
