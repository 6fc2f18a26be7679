//! Collision geometry
//!
//! Projectiles are small relative to their targets, so hits are resolved as
//! strict containment of the projectile's center point inside the target's
//! axis-aligned box rather than full AABB intersection. Bouncing bullets
//! reflect off the nearest face of the box they entered.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Strict point-in-rect containment test
#[inline]
pub fn point_in_rect(point: Vec2, center: Vec2, half: Vec2) -> bool {
    (point.x - center.x).abs() < half.x && (point.y - center.y).abs() < half.y
}

/// Outward normal of the box face nearest to an interior point
pub fn nearest_face_normal(point: Vec2, center: Vec2, half: Vec2) -> Vec2 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let pen_x = half.x - dx.abs();
    let pen_y = half.y - dy.abs();
    if pen_x < pen_y {
        Vec2::new(dx.signum(), 0.0)
    } else {
        Vec2::new(0.0, dy.signum())
    }
}

/// Reflect velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Whether a point has left the playfield by more than `margin`
#[inline]
pub fn outside_field(point: Vec2, margin: f32) -> bool {
    point.x < -margin
        || point.x > FIELD_WIDTH + margin
        || point.y < -margin
        || point.y > FIELD_HEIGHT + margin
}
