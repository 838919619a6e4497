//! Fixed timestep accumulator
//!
//! Turns variable wall-clock frame deltas into a whole number of
//! `FIXED_TIMESTEP` physics steps. Leftover time carries into the next frame.

use crate::consts::FIXED_TIMESTEP;

/// Steps above this in one frame get a debug log line
const CATCH_UP_LOG_THRESHOLD: u32 = 8;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    previous_ticks: f64,
    leftover: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SimulationClock {
    /// Start counting from wall-clock time `start` (seconds)
    pub fn new(start: f64) -> Self {
        Self {
            previous_ticks: start,
            leftover: 0.0,
        }
    }

    #[inline]
    fn step() -> f64 {
        f64::from(FIXED_TIMESTEP)
    }

    /// Timestamp of the last `advance` call
    pub fn previous_ticks(&self) -> f64 {
        self.previous_ticks
    }

    /// Time carried over to the next frame, always in `[0, FIXED_TIMESTEP)`
    pub fn leftover(&self) -> f64 {
        self.leftover
    }

    /// Feed the current wall-clock time and get the number of steps due
    ///
    /// There is no cap: a stalled frame produces a burst of catch-up steps.
    /// Time going backwards counts as zero elapsed.
    pub fn advance(&mut self, now: f64) -> u32 {
        let mut delta = (now - self.previous_ticks).max(0.0);
        self.previous_ticks = now;
        delta += self.leftover;

        let step = Self::step();
        if delta < step {
            self.leftover = delta;
            return 0;
        }

        let mut steps = 0;
        while delta >= step {
            delta -= step;
            steps += 1;
        }
        self.leftover = delta;

        if steps > CATCH_UP_LOG_THRESHOLD {
            log::debug!("Clock catching up: {} steps this frame", steps);
        }
        steps
    }
}
