//! Target acquisition and the aim indicator.
//!
//! Two refresh paths share one indicator shape:
//! - screen-center raycast, every frame (third-person authoritative aim)
//! - isometric look-ahead: a point projected ahead of the player toward the
//!   move target, dropped onto the ground; only while a move is in flight
//!
//! A raycast miss is a valid outcome: `active = false` tells consumers to
//! fall back to the player position, never to reuse stale data.

use glam::{Vec2, Vec3};
use world_core::collision::{LayerMask, RayHit, SurfaceRaycast};
use world_core::components::{AimIndicator, CameraPose};

#[derive(Clone, Copy, Debug)]
pub struct AimCfg {
    pub max_distance: f32,
    pub mask: LayerMask,
    /// Distance ahead of the player for the isometric indicator.
    pub look_ahead: f32,
    /// Height above the probe point the downward cast starts from.
    pub drop_height: f32,
    /// Length of the downward cast.
    pub drop_range: f32,
}

impl Default for AimCfg {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            mask: LayerMask::ALL,
            look_ahead: 3.0,
            drop_height: 10.0,
            drop_range: 20.0,
        }
    }
}

/// Camera projection parameters needed to build viewport rays.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub fov_y_rad: f32,
    pub aspect: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y_rad: 60f32.to_radians(),
            aspect: 16.0 / 9.0,
        }
    }
}

/// World ray through a normalized viewport point (0,0 top-left, 1,1
/// bottom-right). Returns (origin, unit direction).
#[must_use]
pub fn viewport_ray(pose: &CameraPose, proj: &Projection, uv: Vec2) -> (Vec3, Vec3) {
    let ndc_x = uv.x * 2.0 - 1.0;
    let ndc_y = 1.0 - uv.y * 2.0;
    let half_h = (proj.fov_y_rad * 0.5).tan();
    let half_w = half_h * proj.aspect;
    let dir_cam = Vec3::new(ndc_x * half_w, ndc_y * half_h, 1.0);
    (pose.eye, (pose.rotation * dir_cam).normalize())
}

/// First surface intersection within `max_dist` restricted to `mask`.
pub fn acquire(
    world: &impl SurfaceRaycast,
    origin: Vec3,
    dir: Vec3,
    max_dist: f32,
    mask: LayerMask,
) -> Option<RayHit> {
    world.raycast(origin, dir, max_dist, mask)
}

/// Refresh the indicator from a screen-center ray.
pub fn update_screen_center(
    world: &impl SurfaceRaycast,
    pose: &CameraPose,
    cfg: &AimCfg,
    out: &mut AimIndicator,
) {
    match acquire(world, pose.eye, pose.forward(), cfg.max_distance, cfg.mask) {
        Some(hit) => {
            out.world_point = hit.point;
            out.active = true;
        }
        None => out.active = false,
    }
}

/// Isometric refresh: ground projection of the look-ahead point while a move
/// is in flight. If the downward cast misses, fall back to the player's own
/// elevation. An idle intent deactivates the indicator.
pub fn update_look_ahead(
    world: &impl SurfaceRaycast,
    cfg: &AimCfg,
    player_pos: Vec3,
    move_target: Option<Vec3>,
    out: &mut AimIndicator,
) {
    let Some(target) = move_target else {
        out.active = false;
        return;
    };
    let mut to = target - player_pos;
    to.y = 0.0;
    let dir = to.normalize_or_zero();
    let probe = player_pos + dir * cfg.look_ahead;
    let origin = probe + Vec3::Y * cfg.drop_height;
    match acquire(world, origin, -Vec3::Y, cfg.drop_range, cfg.mask) {
        Some(hit) => out.world_point = hit.point,
        None => out.world_point = Vec3::new(probe.x, player_pos.y, probe.z),
    }
    out.active = true;
}
