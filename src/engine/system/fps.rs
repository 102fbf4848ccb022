use std::time::{Duration, Instant};

/// Produces the elapsed seconds fed into `update` once per frame.
pub struct FrameClock {
    source: Source,
    frame_index: u64,
}

enum Source {
    Realtime {
        last_instant: Option<Instant>,
        dt_min: Duration,
        dt_max: Duration,
    },
    Fixed(f32),
}

impl Default for FrameClock {
    #[inline]
    fn default() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    /// Wall clock deltas, clamped to `[dt_min, dt_max]` so a stall (debugger, minimized
    /// window) does not turn into one huge step.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            source: Source::Realtime {
                last_instant: None,
                dt_min,
                dt_max,
            },
            frame_index: 0,
        }
    }

    /// Every tick reports exactly `step_seconds`, independent of the wall clock.
    pub fn fixed(step_seconds: f32) -> Self {
        Self {
            source: Source::Fixed(step_seconds.max(0.0)),
            frame_index: 0,
        }
    }

    #[inline]
    pub fn from_frame_rate(frames_per_second: u16) -> Self {
        Self::fixed(1.0_f32 / f32::from(frames_per_second.max(1)))
    }

    /// Seconds since the previous tick. The very first realtime tick only sets the baseline
    /// and reports `0.0`.
    pub fn tick(&mut self) -> f32 {
        self.frame_index += 1;
        match &mut self.source {
            Source::Fixed(step) => *step,
            Source::Realtime {
                last_instant,
                dt_min,
                dt_max,
            } => {
                let now = Instant::now();
                let elapsed = last_instant
                    .replace(now)
                    .map(|before| now.saturating_duration_since(before).clamp(*dt_min, *dt_max))
                    .unwrap_or(Duration::ZERO);
                elapsed.as_secs_f32()
            }
        }
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn reset(&mut self) {
        self.frame_index = 0;
        if let Source::Realtime { last_instant, .. } = &mut self.source {
            *last_instant = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_repeats_the_step() {
        let mut clock = FrameClock::fixed(0.25);
        assert_eq!(clock.tick(), 0.25);
        assert_eq!(clock.tick(), 0.25);
        assert_eq!(clock.frame_index(), 2);
    }

    #[test]
    fn frame_rate_clock_uses_the_reciprocal() {
        let mut clock = FrameClock::from_frame_rate(4);
        assert_eq!(clock.tick(), 0.25);
        let mut clock = FrameClock::from_frame_rate(0);
        assert_eq!(clock.tick(), 1.0);
    }

    #[test]
    fn realtime_clock_starts_at_zero_and_clamps() {
        let min = Duration::from_millis(5);
        let max = Duration::from_millis(10);
        let mut clock = FrameClock::with_clamps(min, max);
        assert_eq!(clock.tick(), 0.0);

        let dt = clock.tick();
        assert!(dt >= min.as_secs_f32() && dt <= max.as_secs_f32(), "{dt}");

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(clock.tick(), max.as_secs_f32());
    }

    #[test]
    fn reset_restarts_the_baseline() {
        let mut clock = FrameClock::default();
        clock.tick();
        clock.tick();
        clock.reset();
        assert_eq!(clock.frame_index(), 0);
        assert_eq!(clock.tick(), 0.0);
    }
}
