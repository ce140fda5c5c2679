/// Fixed-rate tick scheduling
///
/// Gameplay advances in discrete ticks. Each rendered frame asks the clock
/// how many ticks have accumulated since the last frame and runs that many
/// updates, so movement speed is independent of the display refresh rate.
use std::time::{Duration, Instant};

/// Gameplay ticks per second
pub const TICK_RATE: u32 = 60;
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Maximum ticks run in a single frame to prevent spiral of death
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Accumulates wall-clock time and converts it into ticks
pub struct TickClock {
    accumulator: Duration,
    last_frame_time: Instant,
    paused: bool,
    frame_count: u64,
    tick_count: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            tick_count: 0,
        }
    }

    /// Begin a new frame, returns the number of ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        if self.paused {
            return 0;
        }

        self.accumulate(elapsed)
    }

    /// Feed `elapsed` time into the accumulator, returns the ticks now due
    fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= TICK_DURATION && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= TICK_DURATION;
            ticks += 1;
        }

        // Drop the backlog instead of replaying it over later frames
        if ticks == MAX_TICKS_PER_FRAME && self.accumulator >= TICK_DURATION {
            log::warn!(
                "Dropping {:?} of tick backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total ticks handed out since creation
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = TickClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_count(), 0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_tick_duration_matches_rate() {
        let second = TICK_DURATION * TICK_RATE;
        assert!(Duration::from_secs(1) - second < Duration::from_micros(1));
    }

    #[test]
    fn test_accumulate_whole_ticks() {
        let mut clock = TickClock::new();
        assert_eq!(clock.accumulate(TICK_DURATION * 2), 2);
        assert_eq!(clock.accumulate(TICK_DURATION / 2), 0);
        assert_eq!(clock.accumulate(TICK_DURATION / 2), 1);
        assert_eq!(clock.tick_count(), 3);
    }

    #[test]
    fn test_ticks_capped_per_frame() {
        let mut clock = TickClock::new();
        assert_eq!(clock.accumulate(Duration::from_millis(300)), MAX_TICKS_PER_FRAME);
        // Backlog was dropped
        assert_eq!(clock.accumulate(Duration::ZERO), 0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = TickClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_paused_no_ticks() {
        let mut clock = TickClock::new();
        clock.pause();

        thread::sleep(Duration::from_millis(50));

        assert_eq!(clock.begin_frame(), 0);
        assert_eq!(clock.frame_count(), 1);
    }
}
