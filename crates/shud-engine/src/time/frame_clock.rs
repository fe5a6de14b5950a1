use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds (clamped).
    pub dt: f32,

    /// Seconds since the clock was created or last reset.
    pub elapsed: f32,

    /// Monotonic frame counter, starting at 0 after a reset.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped so a stalled window (debugger, minimized) does not
/// produce one huge step. `elapsed` is wall time and is not clamped.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Restarts `elapsed` and the frame counter from now.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.origin = now;
        self.last = now;
        self.frame_index = 0;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.origin).as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_respects_clamps() {
        let min = Duration::from_millis(5);
        let max = Duration::from_millis(10);
        let mut clock = FrameClock::with_clamps(min, max);

        let ft = clock.tick();
        assert!(ft.dt >= min.as_secs_f32());
        assert!(ft.dt <= max.as_secs_f32());

        std::thread::sleep(Duration::from_millis(30));
        let ft = clock.tick();
        assert!((ft.dt - max.as_secs_f32()).abs() < 1e-6);
    }

    #[test]
    fn elapsed_is_unclamped_wall_time() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(20));
        let ft = clock.tick();
        assert!(ft.elapsed >= 0.02);
    }

    #[test]
    fn reset_restarts_counter() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.tick();
        clock.reset();
        let ft = clock.tick();
        assert_eq!(ft.frame_index, 0);
        assert!(ft.elapsed < 1.0);
    }
}
