//! Axis-aligned collision detection and push-out
//!
//! Every entity is a box centered on its position. A moving box is resolved
//! against static boxes one axis at a time: the axis with the shallower
//! overlap is the one we correct along.

use glam::Vec2;

/// Index of a collidable inside the owning session
pub type EntityId = usize;

/// Which side of the moving entity touched something during one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    /// Last obstacle overlapped this update (only valid until the next one)
    pub collided_with: Option<EntityId>,
}

impl CollisionResult {
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether anything was touched
    #[inline]
    pub fn hit(&self) -> bool {
        self.collided_with.is_some()
    }

    /// Record a resolved contact against obstacle `id`
    pub fn record(&mut self, id: EntityId, contact: &Penetration) {
        match (contact.axis, contact.sign > 0.0) {
            (Axis::Y, true) => self.bottom = true,
            (Axis::Y, false) => self.top = true,
            (Axis::X, true) => self.left = true,
            (Axis::X, false) => self.right = true,
        }
        self.collided_with = Some(id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Overlap between two boxes along the axis that should be corrected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    pub axis: Axis,
    /// Overlap distance along `axis` (always > 0)
    pub depth: f32,
    /// +1.0 pushes the moving box toward positive `axis`, -1.0 toward negative
    pub sign: f32,
}

impl Penetration {
    /// Position correction to apply to the moving box
    pub fn correction(&self) -> Vec2 {
        match self.axis {
            Axis::X => Vec2::new(self.depth * self.sign, 0.0),
            Axis::Y => Vec2::new(0.0, self.depth * self.sign),
        }
    }
}

/// Check overlap between a moving box `a` and a static box `b`
///
/// Boxes are given as center + half extents. Touching edges do not overlap.
/// When both axes penetrate equally, the vertical axis is chosen.
pub fn aabb_penetration(
    center_a: Vec2,
    half_a: Vec2,
    center_b: Vec2,
    half_b: Vec2,
) -> Option<Penetration> {
    let d = center_a - center_b;
    let reach = half_a + half_b;

    if d.x.abs() >= reach.x || d.y.abs() >= reach.y {
        return None;
    }

    let depth_x = reach.x - d.x.abs();
    let depth_y = reach.y - d.y.abs();

    let (axis, depth, delta) = if depth_y <= depth_x {
        (Axis::Y, depth_y, d.y)
    } else {
        (Axis::X, depth_x, d.x)
    };

    // Coincident centers push up/right
    let sign = if delta >= 0.0 { 1.0 } else { -1.0 };

    Some(Penetration { axis, depth, sign })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separated_boxes_miss() {
        let half = Vec2::splat(0.5);
        assert!(aabb_penetration(Vec2::new(2.0, 0.0), half, Vec2::ZERO, half).is_none());
        assert!(aabb_penetration(Vec2::new(0.0, -2.0), half, Vec2::ZERO, half).is_none());
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let half = Vec2::splat(0.5);
        assert!(aabb_penetration(Vec2::new(1.0, 0.0), half, Vec2::ZERO, half).is_none());
        assert!(aabb_penetration(Vec2::new(0.3, 1.0), half, Vec2::ZERO, half).is_none());
    }

    #[test]
    fn test_shallow_vertical_overlap_resolves_up() {
        let half = Vec2::splat(0.5);
        let hit = aabb_penetration(Vec2::new(0.1, 0.9), half, Vec2::ZERO, half).unwrap();
        assert_eq!(hit.axis, Axis::Y);
        assert!((hit.depth - 0.1).abs() < 1e-5);
        assert_eq!(hit.sign, 1.0);
    }

    #[test]
    fn test_shallow_horizontal_overlap_resolves_left() {
        let half = Vec2::splat(0.5);
        let hit = aabb_penetration(Vec2::new(-0.8, 0.2), half, Vec2::ZERO, half).unwrap();
        assert_eq!(hit.axis, Axis::X);
        assert!((hit.depth - 0.2).abs() < 1e-5);
        assert_eq!(hit.sign, -1.0);
        let fix = hit.correction();
        assert!((fix.x + 0.2).abs() < 1e-5);
        assert_eq!(fix.y, 0.0);
    }

    #[test]
    fn test_equal_depth_prefers_vertical() {
        let half = Vec2::splat(0.5);
        let hit = aabb_penetration(Vec2::new(0.75, 0.75), half, Vec2::ZERO, half).unwrap();
        assert_eq!(hit.axis, Axis::Y);
        assert_eq!(hit.depth, 0.25);
    }

    #[test]
    fn test_record_sets_flag_by_side() {
        let mut result = CollisionResult::none();
        assert!(!result.hit());

        result.record(
            3,
            &Penetration {
                axis: Axis::Y,
                depth: 0.1,
                sign: 1.0,
            },
        );
        assert!(result.bottom && !result.top && !result.left && !result.right);
        assert_eq!(result.collided_with, Some(3));

        result.record(
            7,
            &Penetration {
                axis: Axis::X,
                depth: 0.1,
                sign: -1.0,
            },
        );
        assert!(result.right);
        assert_eq!(result.collided_with, Some(7));
    }
}
