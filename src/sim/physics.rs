//! Force composition for the lander

use glam::Vec3;

use super::collision::CollisionResult;
use super::entity::Entity;
use crate::settings::Tuning;

/// Gravity, thruster and drag, applied once per fixed step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsStepper {
    pub gravity: f32,
    pub thruster_power: f32,
    pub drag_coefficient: f32,
}

impl PhysicsStepper {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            gravity: tuning.gravity,
            thruster_power: tuning.thruster_power,
            drag_coefficient: tuning.drag_coefficient,
        }
    }

    /// Total acceleration for `body` given its current intent and velocity
    ///
    /// Drag is recomputed from the current x velocity every step.
    pub fn compose_acceleration(&self, body: &Entity) -> Vec3 {
        let thruster = body.movement * self.thruster_power * body.speed;
        let drag = body.velocity.x * self.drag_coefficient;
        thruster + Vec3::new(drag, self.gravity, 0.0)
    }

    /// Write the composed acceleration into `body` and advance it one step
    pub fn step(&self, body: &mut Entity, obstacles: &[Entity], dt: f32) -> CollisionResult {
        body.acceleration = self.compose_acceleration(body);
        body.update(dt, obstacles)
    }
}
