//! Lunar Lander entry point
//!
//! Runs a headless session: a scripted pilot flies the lander from the start
//! platform to the goal under a simulated 60 Hz clock and the outcome is
//! logged.
//!
//! Usage: `lunar-lander [tuning.json]`

use lunar_lander::game::{FrameStatus, SteppedTime};
use lunar_lander::input::standard_landing;
use lunar_lander::renderer::{Frame, Renderer};
use lunar_lander::sim::{GameSession, Outcome};
use lunar_lander::{Game, Tuning};

/// Give up after this many frames (one simulated minute at 60 fps)
const MAX_FRAMES: u64 = 60 * 60;

/// Simulated display refresh, in seconds
const FRAME_TIME: f64 = 1.0 / 60.0;

/// Logs status text the first time it appears
#[derive(Default)]
struct LogRenderer {
    shown: Vec<&'static str>,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        for item in &frame.texts {
            if !self.shown.contains(&item.text) {
                log::info!("[screen] {}", item.text);
                self.shown.push(item.text);
            }
        }
    }
}

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    match Tuning::load(&path) {
        Ok(tuning) => tuning,
        Err(e) => {
            log::warn!("{e}; using default tuning");
            Tuning::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Lunar Lander (headless) starting...");

    let session = GameSession::new(load_tuning());
    let mut game = Game::new(session, 0.0);
    let mut input = standard_landing();
    let mut time = SteppedTime::new(FRAME_TIME);
    let mut renderer = LogRenderer::default();

    while game.frames < MAX_FRAMES && !game.session.is_over() {
        if game.run_frame(&mut input, &mut time, &mut renderer) == FrameStatus::Quit {
            break;
        }
    }

    let session = &game.session;
    let summary = match session.outcome {
        Outcome::Won => "landed",
        Outcome::Lost => "crashed",
        Outcome::Active => "still flying",
    };
    println!(
        "{} after {} frames / {} steps, fuel {:.2}, lander at {}",
        summary, game.frames, session.steps, session.fuel, session.player.position
    );
}
