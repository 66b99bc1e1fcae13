use std::time::Instant;

/// Wall clock for the driver loop - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Milliseconds since the previous tick; advances the clock
    pub fn tick_ms(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32() * 1000.0;
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds of wall time per degree of carousel rotation
pub const DEFAULT_MS_PER_DEGREE: f32 = 20.0;

/// Shared spin angle for every animated object in the scene.
///
/// The angle stays in `[0, 360)` for any sequence of deltas.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    angle: f32,
    enabled: bool,
    ms_per_degree: f32,
}

impl AnimationClock {
    pub fn new(ms_per_degree: f32, enabled: bool) -> Self {
        Self {
            angle: 0.0,
            enabled,
            ms_per_degree,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn tick(&mut self, delta_ms: f32) {
        if !self.enabled || !delta_ms.is_finite() || delta_ms <= 0.0 {
            return;
        }
        let step = (delta_ms / self.ms_per_degree) % 360.0;
        let angle = (self.angle + step) % 360.0;
        // rounding can land exactly on the upper bound
        self.angle = if angle < 360.0 { angle } else { 0.0 };
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_MS_PER_DEGREE, true)
    }
}
