//! Fixed timestep simulation tick
//!
//! Input is applied once per frame, then `tick` runs once per fixed step
//! the clock hands out.

use glam::Vec3;

use super::collision::CollisionResult;
use super::physics::PhysicsStepper;
use super::state::GameSession;

/// A single thruster direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thrust {
    Left,
    Right,
    Up,
}

impl Thrust {
    /// Unit intent vector for this direction
    pub fn vector(self) -> Vec3 {
        match self {
            Thrust::Left => Vec3::NEG_X,
            Thrust::Right => Vec3::X,
            Thrust::Up => Vec3::Y,
        }
    }
}

/// Input commands for one frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// At most one thruster fires per frame
    pub thrust: Option<Thrust>,
}

/// Apply one frame of input to the lander
///
/// Clears last frame's intent, then fires the requested thruster if there
/// is fuel left, burning fuel for it. Finished sessions are left untouched.
pub fn apply_input(session: &mut GameSession, input: &TickInput) {
    if session.is_over() {
        return;
    }

    session.player.reset_movement();
    if session.out_of_fuel() {
        return;
    }

    if let Some(thrust) = input.thrust {
        match thrust {
            Thrust::Left => session.player.move_left(),
            Thrust::Right => session.player.move_right(),
            Thrust::Up => session.player.move_up(),
        }
        session.burn_fuel();
    }

    session.player.normalise_movement();
}

/// Advance the session by one fixed timestep
///
/// Returns the collision result of the step, or `None` once the session is
/// over (finished sessions are frozen).
pub fn tick(session: &mut GameSession, dt: f32) -> Option<CollisionResult> {
    if session.is_over() {
        return None;
    }

    let stepper = PhysicsStepper::from_tuning(&session.tuning);
    let result = stepper.step(&mut session.player, &session.collidables, dt);
    session.steps += 1;
    session.resolve_outcome(&result);

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIXED_TIMESTEP;
    use crate::settings::Tuning;
    use crate::sim::entity::{Entity, EntityKind};
    use crate::sim::state::{FINISH_POS, FINISH_SIZE, Outcome};
    use glam::Vec2;

    fn open_sky() -> GameSession {
        GameSession::with_level(Tuning::default(), Vec::new())
    }

    #[test]
    fn test_input_burns_fuel() {
        let mut session = open_sky();
        apply_input(
            &mut session,
            &TickInput {
                thrust: Some(Thrust::Up),
            },
        );
        assert_eq!(session.player.movement, Vec3::Y);
        assert!((session.fuel - 99.99).abs() < 1e-4);

        apply_input(&mut session, &TickInput::default());
        assert_eq!(session.player.movement, Vec3::ZERO);
        assert!((session.fuel - 99.99).abs() < 1e-4);
    }

    #[test]
    fn test_empty_tank_blocks_thrust() {
        let mut session = open_sky();
        session.fuel = 0.0;
        apply_input(
            &mut session,
            &TickInput {
                thrust: Some(Thrust::Left),
            },
        );
        assert_eq!(session.player.movement, Vec3::ZERO);
        assert_eq!(session.fuel, 0.0);
    }

    #[test]
    fn test_tick_falls_under_gravity() {
        let mut session = open_sky();
        let start_y = session.player.position.y;
        let result = tick(&mut session, FIXED_TIMESTEP).unwrap();
        assert!(!result.hit());
        assert!(session.player.position.y < start_y);
        assert_eq!(session.steps, 1);
    }

    #[test]
    fn test_drop_onto_goal_wins() {
        let tuning = Tuning {
            player_start: Vec3::new(-3.0, 0.6, 0.0),
            ..Default::default()
        };
        let goal = Entity::new(EntityKind::Goal, FINISH_POS, FINISH_SIZE);
        let mut session = GameSession::with_level(tuning, vec![goal]);

        for _ in 0..600 {
            if tick(&mut session, FIXED_TIMESTEP).is_none() {
                break;
            }
        }
        assert_eq!(session.outcome, Outcome::Won);
    }

    #[test]
    fn test_terminal_freeze() {
        let tuning = Tuning {
            player_start: Vec3::new(0.0, 0.5, 0.0),
            ..Default::default()
        };
        let hazard = Entity::new(EntityKind::Hazard, Vec3::ZERO, Vec2::new(0.7, 0.8));
        let mut session = GameSession::with_level(tuning, vec![hazard]);

        tick(&mut session, FIXED_TIMESTEP);
        assert_eq!(session.outcome, Outcome::Lost);

        let position = session.player.position;
        let velocity = session.player.velocity;
        let fuel = session.fuel;
        let steps = session.steps;

        for _ in 0..10 {
            apply_input(
                &mut session,
                &TickInput {
                    thrust: Some(Thrust::Up),
                },
            );
            assert!(tick(&mut session, FIXED_TIMESTEP).is_none());
        }

        assert_eq!(session.player.position, position);
        assert_eq!(session.player.velocity, velocity);
        assert_eq!(session.fuel, fuel);
        assert_eq!(session.steps, steps);
        assert_eq!(session.outcome, Outcome::Lost);
    }
}
