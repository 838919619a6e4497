//! Frame driver
//!
//! One frame = poll input -> apply thrust -> run the fixed steps the clock
//! hands out -> draw. Everything happens on the calling thread.

use std::time::Instant;

use crate::consts::FIXED_TIMESTEP;
use crate::input::InputSource;
use crate::renderer::{Frame, Renderer};
use crate::sim::{GameSession, SimulationClock, apply_input, tick};

/// Monotonic elapsed time in seconds
pub trait TimeSource {
    fn now(&mut self) -> f64;
}

/// Real time since construction
#[derive(Debug, Clone)]
pub struct WallClock {
    start: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimeSource for WallClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Simulated time that moves forward a fixed amount on every read
#[derive(Debug, Clone)]
pub struct SteppedTime {
    pub now: f64,
    pub frame: f64,
}

impl SteppedTime {
    pub fn new(frame: f64) -> Self {
        Self { now: 0.0, frame }
    }
}

impl TimeSource for SteppedTime {
    fn now(&mut self) -> f64 {
        self.now += self.frame;
        self.now
    }
}

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// A running game: one session plus its clock
#[derive(Debug, Clone)]
pub struct Game {
    pub session: GameSession,
    pub clock: SimulationClock,
    /// Frames run so far
    pub frames: u64,
}

impl Game {
    /// Start a game with the clock anchored at `start` seconds
    pub fn new(session: GameSession, start: f64) -> Self {
        Self {
            session,
            clock: SimulationClock::new(start),
            frames: 0,
        }
    }

    /// Run one frame
    ///
    /// A finished session keeps rendering but no longer steps.
    pub fn run_frame(
        &mut self,
        input: &mut dyn InputSource,
        time: &mut dyn TimeSource,
        renderer: &mut dyn Renderer,
    ) -> FrameStatus {
        let keys = input.poll();
        if keys.quit {
            log::info!("Quit requested after {} frames", self.frames);
            return FrameStatus::Quit;
        }

        apply_input(&mut self.session, &keys.to_tick_input());

        let steps = self.clock.advance(time.now());
        for _ in 0..steps {
            if tick(&mut self.session, FIXED_TIMESTEP).is_none() {
                break;
            }
        }

        renderer.draw(&Frame::capture(&self.session));
        self.frames += 1;
        FrameStatus::Continue
    }

    /// Run frames until quit, or until `max_frames` when given
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        time: &mut dyn TimeSource,
        renderer: &mut dyn Renderer,
        max_frames: Option<u64>,
    ) {
        while max_frames.is_none_or(|max| self.frames < max) {
            if self.run_frame(input, time, renderer) == FrameStatus::Quit {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputFrame, ScriptedInput};
    use crate::renderer::DrawList;
    use crate::settings::Tuning;
    use crate::sim::{Outcome, Thrust};

    const DT: f64 = FIXED_TIMESTEP as f64;

    #[test]
    fn test_frame_rate_does_not_change_step_count() {
        // Same half second of real time at 30 fps and at 120 fps
        let mut slow = Game::new(GameSession::new(Tuning::default()), 0.0);
        let mut fast = Game::new(GameSession::new(Tuning::default()), 0.0);
        let mut idle = ScriptedInput::new(Vec::new());
        let mut renderer = DrawList::new();

        slow.run(&mut idle, &mut SteppedTime::new(1.0 / 30.0), &mut renderer, Some(15));
        fast.run(&mut idle, &mut SteppedTime::new(1.0 / 120.0), &mut renderer, Some(60));

        assert!(slow.session.steps.abs_diff(fast.session.steps) <= 1);
        assert!(slow.session.steps >= 29);
    }

    #[test]
    fn test_thrust_applies_once_per_frame() {
        let mut game = Game::new(GameSession::new(Tuning::default()), 0.0);
        let mut input = ScriptedInput::new(vec![(10, InputFrame::thrusting(Thrust::Up))]);
        let mut renderer = DrawList::new();

        // Big frames: several steps per frame, fuel still burns per frame
        game.run(&mut input, &mut SteppedTime::new(DT * 4.5), &mut renderer, Some(10));
        assert!((game.session.fuel - 99.9).abs() < 1e-3);
        assert!(game.session.steps >= 40);
        assert_eq!(renderer.frames.len(), 10);
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut game = Game::new(GameSession::new(Tuning::default()), 0.0);
        let mut input = ScriptedInput::new(vec![(3, InputFrame::default())]).quit_when_done();
        let mut renderer = DrawList::new();

        game.run(&mut input, &mut SteppedTime::new(DT), &mut renderer, None);
        assert_eq!(game.frames, 3);
        assert_eq!(renderer.frames.len(), 3);
    }

    #[test]
    fn test_wall_clock_is_monotonic() {
        let mut clock = WallClock::new();
        let mut last = clock.now();
        assert!(last >= 0.0);
        for _ in 0..100 {
            let now = clock.now();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn test_wall_clock_drives_game() {
        let mut game = Game::new(GameSession::new(Tuning::default()), 0.0);
        let mut clock = WallClock::new();
        let mut idle = ScriptedInput::new(Vec::new());
        let mut renderer = DrawList::new();

        game.run(&mut idle, &mut clock, &mut renderer, Some(3));
        assert_eq!(renderer.frames.len(), 3);
        assert!(game.clock.previous_ticks() >= 0.0);
        assert!(game.clock.leftover() < DT);
    }

    #[test]
    fn test_finished_session_keeps_rendering() {
        let mut session = GameSession::new(Tuning::default());
        session.outcome = Outcome::Won;
        let mut game = Game::new(session, 0.0);
        let mut idle = ScriptedInput::new(Vec::new());
        let mut renderer = DrawList::new();

        game.run(&mut idle, &mut SteppedTime::new(DT * 2.0), &mut renderer, Some(5));
        assert_eq!(game.session.steps, 0);
        assert_eq!(renderer.frames.len(), 5);
        assert_eq!(renderer.last().unwrap().texts.len(), 1);
    }
}
