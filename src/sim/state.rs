//! Game session state and outcome rules

use glam::{Vec2, Vec3};

use super::collision::CollisionResult;
use super::entity::{Entity, EntityKind};
use crate::consts::*;
use crate::settings::Tuning;

/// Goal (finish line) placement
pub const FINISH_POS: Vec3 = Vec3::new(-3.0, 0.0, 0.0);
pub const FINISH_SIZE: Vec2 = Vec2::new(1.0, 0.35);
/// Start platform (brick) placement
pub const START_POS: Vec3 = Vec3::new(3.75, 0.0, 0.0);
pub const BRICK_SIZE: Vec2 = Vec2::new(1.0, 1.0);
/// Hazard (fire) size
pub const FIRE_SIZE: Vec2 = Vec2::new(0.7, 0.8);
/// Hazards sit on integer grid cells in `-FIRE_GRID..=FIRE_GRID`
pub const FIRE_GRID: i32 = 3;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still flying
    Active,
    /// Landed on the goal
    Won,
    /// Crashed, burned, or fell out of the play area
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Active)
    }

    /// Status text for a finished session
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Active => None,
            Outcome::Won => Some(WIN_MESSAGE),
            Outcome::Lost => Some(LOSE_MESSAGE),
        }
    }
}

/// Build the collidables of the standard level
///
/// Index 0 is the goal, index 1 the start platform, the rest are hazards
/// laid on every other grid cell (skipping the goal's cell).
pub fn standard_level() -> Vec<Entity> {
    let mut collidables = Vec::with_capacity(PLATFORM_NUM);
    collidables.push(Entity::new(EntityKind::Goal, FINISH_POS, FINISH_SIZE));
    collidables.push(Entity::new(EntityKind::Platform, START_POS, BRICK_SIZE));

    let mut counter = 0;
    'grid: for x in -FIRE_GRID..=FIRE_GRID {
        for y in -FIRE_GRID..=FIRE_GRID {
            if collidables.len() >= PLATFORM_NUM {
                break 'grid;
            }
            let cell = Vec3::new(x as f32, y as f32, 0.0);
            let is_goal_cell = cell.x == FINISH_POS.x && cell.y == FINISH_POS.y;
            if counter % 2 == 1 && !is_goal_cell {
                collidables.push(Entity::new(EntityKind::Hazard, cell, FIRE_SIZE));
            }
            counter += 1;
        }
    }

    collidables
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    /// Remaining fuel; zero or below means the thrusters are dead
    pub fuel: f32,
    pub outcome: Outcome,
    pub player: Entity,
    /// Static level geometry (never moved after build)
    pub collidables: Vec<Entity>,
    /// Fixed steps applied so far
    pub steps: u64,
}

impl GameSession {
    /// New session on the standard level
    pub fn new(tuning: Tuning) -> Self {
        Self::with_level(tuning, standard_level())
    }

    /// New session on custom level geometry
    pub fn with_level(tuning: Tuning, mut collidables: Vec<Entity>) -> Self {
        for entity in &mut collidables {
            entity.settle();
        }
        let player = Entity::player(tuning.player_start, tuning.player_scale);
        let fuel = tuning.starting_fuel;

        log::info!(
            "Session started: {} collidables, fuel {:.2}, player at {}",
            collidables.len(),
            fuel,
            player.position
        );

        Self {
            tuning,
            fuel,
            outcome: Outcome::Active,
            player,
            collidables,
            steps: 0,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[inline]
    pub fn out_of_fuel(&self) -> bool {
        self.fuel <= 0.0
    }

    /// Burn one frame's worth of fuel
    pub fn burn_fuel(&mut self) {
        let had_fuel = !self.out_of_fuel();
        self.fuel -= self.tuning.fuel_usage;
        if had_fuel && self.out_of_fuel() {
            log::info!("Out of fuel");
        }
    }

    /// Apply the outcome rules after one fixed step
    ///
    /// Terminal outcomes never change.
    pub fn resolve_outcome(&mut self, result: &CollisionResult) {
        if self.is_over() {
            return;
        }

        if let Some(kind) = result
            .collided_with
            .and_then(|id| self.collidables.get(id))
            .map(|e| e.kind)
        {
            if kind == EntityKind::Hazard {
                self.finish(Outcome::Lost, "hit a hazard");
                return;
            }
            if self.out_of_fuel() && kind != EntityKind::Goal {
                self.finish(Outcome::Lost, "touched down with an empty tank");
                return;
            }
            if kind == EntityKind::Goal && result.bottom {
                self.finish(Outcome::Won, "landed on the goal");
                return;
            }
        }

        if self.out_of_fuel() && self.player.position.y <= self.tuning.lower_bound {
            self.finish(Outcome::Lost, "fell out of the play area");
        }
    }

    fn finish(&mut self, outcome: Outcome, reason: &str) {
        self.outcome = outcome;
        log::info!(
            "Session {:?} after {} steps: {} (fuel {:.2})",
            outcome,
            self.steps,
            reason,
            self.fuel
        );
    }
}
