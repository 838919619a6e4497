//! Simulation entities: the lander and the static collidables

use glam::{Vec2, Vec3};

use super::collision::{Axis, CollisionResult, aabb_penetration};
use crate::normalize_intent;

/// What an entity is, for gameplay purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The player-controlled lander
    Player,
    /// Landing on top of this wins
    Goal,
    /// Touching this loses
    Hazard,
    /// Neutral ground
    Platform,
}

/// A box-shaped body in the play area
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Thruster intent for this frame (magnitude <= 1 once normalized)
    pub movement: Vec3,
    /// Multiplier applied to thruster intent
    pub speed: f32,
    scale: Vec3,
    width: f32,
    height: f32,
}

impl Entity {
    /// Create an entity whose box is `size` wide/tall
    pub fn new(kind: EntityKind, position: Vec3, size: Vec2) -> Self {
        let mut entity = Self {
            kind,
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            movement: Vec3::ZERO,
            speed: 0.0,
            scale: Vec3::ONE,
            width: 1.0,
            height: 1.0,
        };
        entity.set_scale(size.extend(1.0));
        entity
    }

    /// Create the lander
    pub fn player(position: Vec3, scale: Vec3) -> Self {
        let mut entity = Self::new(EntityKind::Player, position, scale.truncate());
        entity.speed = 1.0;
        entity
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set the render scale; collision bounds follow it
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.refresh_bounds();
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }

    fn refresh_bounds(&mut self) {
        self.width = self.scale.x;
        self.height = self.scale.y;
    }

    /// Clear thruster intent (done at the start of every frame)
    pub fn reset_movement(&mut self) {
        self.movement = Vec3::ZERO;
    }

    pub fn move_left(&mut self) {
        self.movement.x = -1.0;
    }

    pub fn move_right(&mut self) {
        self.movement.x = 1.0;
    }

    pub fn move_up(&mut self) {
        self.movement.y = 1.0;
    }

    pub fn normalise_movement(&mut self) {
        self.movement = normalize_intent(self.movement);
    }

    /// Advance by `delta_time` and push out of any overlapped obstacle
    ///
    /// Integration is semi-implicit Euler on x/y; z is left alone. Obstacles
    /// are never modified. An empty slice just refreshes bounds.
    pub fn update(&mut self, delta_time: f32, obstacles: &[Entity]) -> CollisionResult {
        self.refresh_bounds();

        self.velocity.x += self.acceleration.x * delta_time;
        self.velocity.y += self.acceleration.y * delta_time;
        self.position.x += self.velocity.x * delta_time;
        self.position.y += self.velocity.y * delta_time;

        let mut result = CollisionResult::none();
        for (id, obstacle) in obstacles.iter().enumerate() {
            let Some(contact) = aabb_penetration(
                self.position.truncate(),
                self.half_extents(),
                obstacle.position.truncate(),
                obstacle.half_extents(),
            ) else {
                continue;
            };

            let fix = contact.correction();
            self.position.x += fix.x;
            self.position.y += fix.y;
            match contact.axis {
                Axis::X => self.velocity.x = 0.0,
                Axis::Y => self.velocity.y = 0.0,
            }
            result.record(id, &contact);
        }

        result
    }

    /// Zero-time update used once at level build
    pub fn settle(&mut self) {
        self.update(0.0, &[]);
    }
}
