/// Frame-rate statistics fed by the host's frame timestamps.
///
/// Takes timestamps instead of reading a clock, so the same counter works
/// with `Instant`-based desktop hosts and `requestAnimationFrame` times.
pub struct FpsCounter {
    window_start: Option<f64>,
    frame_count: u32,
    pub current_fps: f32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            window_start: None,
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Records a frame at `now_seconds`.
    ///
    /// Returns the frame rate once per second of accumulated time.
    pub fn tick(&mut self, now_seconds: f64) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now_seconds);
        self.frame_count += 1;

        let accumulated = now_seconds - start;
        // Update statistics every 1 second
        if accumulated >= 1.0 {
            self.current_fps = (f64::from(self.frame_count) / accumulated) as f32;

            // Reset counter
            self.window_start = Some(now_seconds);
            self.frame_count = 0;

            return Some(self.current_fps);
        }

        None
    }
}
