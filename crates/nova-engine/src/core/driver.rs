//! Host-agnostic frame scheduling.
//!
//! The browser drives frames through a display refresh callback; tests drive
//! them from a scripted list of timestamps. Both go through [`FrameDriver`],
//! which owns the clock and the fixed-timestep accumulator and never touches a
//! platform timer API. One frame always runs to completion before the next.

use super::time::{FixedTimestep, FrameClock};

/// Supplies frame timestamps in milliseconds. `None` ends the loop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<f64>;
}

impl<I: Iterator<Item = f64>> FrameSource for I {
    fn next_frame(&mut self) -> Option<f64> {
        self.next()
    }
}

/// Summary of one driven frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Monotonic frame number, starting at 1.
    pub frame: u64,
    /// Clamped wall-clock seconds since the previous frame.
    pub frame_dt: f32,
    /// Number of fixed logic steps run this frame.
    pub steps: u32,
}

/// Receives the work of a frame: zero or more fixed steps, then one present.
pub trait FrameHandler {
    /// Advance the simulation by one fixed step of `dt` seconds.
    fn step(&mut self, dt: f32);

    /// Produce output for the frame. Called exactly once per frame.
    fn present(&mut self, _tick: &FrameTick) {}
}

impl<F: FnMut(f32)> FrameHandler for F {
    fn step(&mut self, dt: f32) {
        self(dt)
    }
}

pub struct FrameDriver {
    clock: FrameClock,
    timestep: FixedTimestep,
    frame: u64,
}

impl FrameDriver {
    pub fn new(fixed_dt: f32, max_frame_dt: f32) -> Self {
        Self {
            clock: FrameClock::new(max_frame_dt),
            timestep: FixedTimestep::new(fixed_dt),
            frame: 0,
        }
    }

    /// Run one frame for the given host timestamp.
    pub fn frame<H: FrameHandler + ?Sized>(&mut self, timestamp_ms: f64, handler: &mut H) -> FrameTick {
        let frame_dt = self.clock.tick(timestamp_ms);
        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            handler.step(self.timestep.dt());
        }
        self.frame += 1;
        let tick = FrameTick {
            frame: self.frame,
            frame_dt,
            steps,
        };
        handler.present(&tick);
        tick
    }

    /// Drive frames until the source is exhausted. Returns the frame count.
    pub fn run<S, H>(&mut self, source: &mut S, handler: &mut H) -> u64
    where
        S: FrameSource + ?Sized,
        H: FrameHandler + ?Sized,
    {
        let mut count = 0;
        while let Some(timestamp) = source.next_frame() {
            self.frame(timestamp, handler);
            count += 1;
        }
        count
    }

    /// Frames driven so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn fixed_dt(&self) -> f32 {
        self.timestep.dt()
    }

    /// Restart timing, e.g. after the host was suspended.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        steps: Vec<f32>,
        presents: Vec<FrameTick>,
    }

    impl FrameHandler for Recorder {
        fn step(&mut self, dt: f32) {
            self.steps.push(dt);
        }

        fn present(&mut self, tick: &FrameTick) {
            self.presents.push(*tick);
        }
    }

    #[test]
    fn scripted_frames_drive_fixed_steps() {
        let mut driver = FrameDriver::new(0.01, 0.25);
        let mut rec = Recorder { steps: Vec::new(), presents: Vec::new() };
        let mut timestamps = [0.0, 10.0, 20.0, 50.0].into_iter();

        let frames = driver.run(&mut timestamps, &mut rec);

        assert_eq!(frames, 4);
        assert_eq!(rec.presents.len(), 4);
        assert_eq!(rec.presents[0].steps, 0);
        assert_eq!(rec.presents[3].frame, 4);
        // 10 + 10 + 30 ms at 10 ms per step
        assert!(rec.steps.len() >= 4 && rec.steps.len() <= 5, "steps: {}", rec.steps.len());
        assert!(rec.steps.iter().all(|&dt| (dt - 0.01).abs() < 1e-6));
    }

    #[test]
    fn closure_can_be_the_handler() {
        let mut driver = FrameDriver::new(0.5, 1.0);
        let mut total = 0.0;
        let mut step = |dt: f32| total += dt;
        driver.frame(0.0, &mut step);
        driver.frame(1000.0, &mut step);
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn present_runs_even_without_steps() {
        let mut driver = FrameDriver::new(1.0 / 60.0, 0.25);
        let mut rec = Recorder { steps: Vec::new(), presents: Vec::new() };
        let tick = driver.frame(0.0, &mut rec);
        assert_eq!(tick.steps, 0);
        assert_eq!(rec.presents.len(), 1);
        assert_eq!(driver.frame_count(), 1);
    }
}
