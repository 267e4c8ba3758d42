/// Converts host refresh timestamps (milliseconds, as handed to a display
/// refresh callback) into elapsed seconds per frame.
///
/// The first frame reports zero elapsed time. Long stalls (tab in background,
/// debugger pause) are clamped to `max_dt`.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
    max_dt: f32,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_timestamp: None,
            max_dt,
        }
    }

    /// Record a new timestamp and return the elapsed seconds since the last one.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_timestamp {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt.clamp(0.0, self.max_dt)
    }

    /// Forget the last timestamp so the next frame reports zero elapsed time.
    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}

/// Fixed timestep accumulator.
/// Ensures game logic runs at a consistent rate regardless of frame time.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Upper bound on logic steps per frame.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_reports_zero() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.tick(1234.0), 0.0);
    }

    #[test]
    fn clock_converts_ms_to_seconds() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6, "dt was {dt}");
    }

    #[test]
    fn clock_clamps_stalls_and_backwards_time() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(0.0);
        assert_eq!(clock.tick(5000.0), 0.25);
        assert_eq!(clock.tick(4000.0), 0.0);
    }

    #[test]
    fn clock_reset_restarts() {
        let mut clock = FrameClock::new(0.25);
        clock.tick(0.0);
        clock.reset();
        assert_eq!(clock.tick(100.0), 0.0);
    }

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(0.008); // half a frame
        assert_eq!(steps, 0);
        let steps = ts.accumulate(0.010); // over one frame total
        assert_eq!(steps, 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0);
        assert_eq!(steps, FixedTimestep::MAX_STEPS);
    }
}
