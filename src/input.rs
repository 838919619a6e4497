//! Per-frame input
//!
//! The platform layer reports which direction keys are held. Only one
//! thruster fires per frame, picked by fixed priority: left, then right,
//! then up.

use crate::sim::{Thrust, TickInput};

/// Keys held this frame, plus the quit request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub quit: bool,
}

impl InputFrame {
    pub fn thrusting(thrust: Thrust) -> Self {
        let mut frame = Self::default();
        match thrust {
            Thrust::Left => frame.left = true,
            Thrust::Right => frame.right = true,
            Thrust::Up => frame.up = true,
        }
        frame
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            ..Default::default()
        }
    }

    /// The single thruster that fires this frame
    pub fn thrust(&self) -> Option<Thrust> {
        if self.left {
            Some(Thrust::Left)
        } else if self.right {
            Some(Thrust::Right)
        } else if self.up {
            Some(Thrust::Up)
        } else {
            None
        }
    }

    pub fn to_tick_input(&self) -> TickInput {
        TickInput {
            thrust: self.thrust(),
        }
    }
}

/// Source of per-frame input (keyboard, replay, autopilot...)
pub trait InputSource {
    /// Drain pending events and report the current key state
    fn poll(&mut self) -> InputFrame;
}

/// Replays a fixed list of `(frames, input)` segments, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: Vec<(u32, InputFrame)>,
    segment: usize,
    frame_in_segment: u32,
    /// Send quit once the script runs out
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(segments: Vec<(u32, InputFrame)>) -> Self {
        Self {
            segments,
            ..Default::default()
        }
    }

    pub fn quit_when_done(mut self) -> Self {
        self.quit_when_done = true;
        self
    }

    pub fn is_done(&self) -> bool {
        self.segment >= self.segments.len()
    }
}

/// Hand-flown route from the start platform to the goal on the standard level
///
/// Nudge right off the hazard column, climb above the top hazard row, fly
/// left across the level, burn right to stop just past the goal's left edge,
/// then free-fall onto it. Timed for one input frame per 1/60 s.
pub fn standard_landing() -> ScriptedInput {
    ScriptedInput::new(vec![
        (15, InputFrame::thrusting(Thrust::Right)),
        (220, InputFrame::thrusting(Thrust::Up)),
        (326, InputFrame::thrusting(Thrust::Left)),
        (148, InputFrame::thrusting(Thrust::Right)),
    ])
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputFrame {
        while let Some(&(frames, input)) = self.segments.get(self.segment) {
            if self.frame_in_segment < frames {
                self.frame_in_segment += 1;
                return input;
            }
            self.segment += 1;
            self.frame_in_segment = 0;
        }

        if self.quit_when_done {
            InputFrame::quit()
        } else {
            InputFrame::default()
        }
    }
}
