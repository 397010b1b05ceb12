/// Elapsed animation time for one frame.
///
/// Passed by value into the animation driver; every procedural motion is a
/// function of `elapsed_seconds` alone.
///
/// Kept in double precision so that phases stay smooth on long sessions;
/// consumers wrap each phase before narrowing to `f32`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationState {
    pub elapsed_seconds: f64,
}

impl AnimationState {
    #[inline]
    #[must_use]
    pub const fn at(elapsed_seconds: f64) -> Self {
        Self { elapsed_seconds }
    }

    /// `rate * elapsed_seconds` wrapped into `[0, period)`, computed in
    /// double precision and narrowed afterwards.
    #[inline]
    #[must_use]
    pub fn phase(self, rate: f32, period: f64) -> f32 {
        (f64::from(rate) * self.elapsed_seconds).rem_euclid(period) as f32
    }
}

/// Converts host frame timestamps into a monotonically non-decreasing
/// elapsed time measured from the first observed timestamp.
#[derive(Debug, Clone, Default)]
pub struct AnimationClock {
    origin: Option<f64>,
    elapsed: f64,
    frame_count: u64,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observes a host timestamp in seconds and returns the frame's state.
    ///
    /// Timestamps earlier than a previously observed one are clamped.
    pub fn advance(&mut self, timestamp_seconds: f64) -> AnimationState {
        let origin = *self.origin.get_or_insert(timestamp_seconds);
        self.elapsed = (timestamp_seconds - origin).max(self.elapsed);
        self.frame_count += 1;
        self.state()
    }

    /// Same as [`advance`](Self::advance) for millisecond timestamps, as
    /// delivered by `requestAnimationFrame`.
    pub fn advance_millis(&mut self, timestamp_ms: f64) -> AnimationState {
        self.advance(timestamp_ms * 0.001)
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        AnimationState::at(self.elapsed)
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
