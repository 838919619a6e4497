//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (collidables by index)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod entity;
pub mod physics;
pub mod state;
pub mod tick;

pub use clock::SimulationClock;
pub use collision::{Axis, CollisionResult, EntityId, Penetration, aabb_penetration};
pub use entity::{Entity, EntityKind};
pub use physics::PhysicsStepper;
pub use state::{GameSession, Outcome, standard_level};
pub use tick::{Thrust, TickInput, apply_input, tick};
