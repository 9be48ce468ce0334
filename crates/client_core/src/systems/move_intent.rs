//! Click-to-move controller for isometric mode.
//!
//! A click on navigable ground sets a persistent intent; each frame the
//! controller emits one movement step toward it until the planar distance
//! drops to the stop threshold. There is no unreachable-target timeout: the
//! intent stays active until arrival or an explicit `stop`.

use glam::{Vec2, Vec3};
use world_core::collision::{LayerMask, SurfaceRaycast};
use world_core::components::{CameraPose, yaw_facing};

use super::MoveStep;
use super::aim::{Projection, viewport_ray};

/// The client's current click-to-move destination.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    pub target: Vec3,
    pub active: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct ClickMoveCfg {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub stop_distance: f32,
    pub max_click_distance: f32,
    pub ground_mask: LayerMask,
}

impl Default for ClickMoveCfg {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            stop_distance: 0.5,
            max_click_distance: 1000.0,
            ground_mask: LayerMask::GROUND,
        }
    }
}

/// Acquire a ground hit under the pointer and arm the intent. Returns the
/// hit point (for a move-target marker) on success; a miss leaves the
/// current intent untouched.
pub fn begin_from_click(
    world: &impl SurfaceRaycast,
    pose: &CameraPose,
    proj: &Projection,
    cursor_uv: Vec2,
    cfg: &ClickMoveCfg,
    intent: &mut MoveIntent,
) -> Option<Vec3> {
    let (origin, dir) = viewport_ray(pose, proj, cursor_uv);
    let hit = world.raycast(origin, dir, cfg.max_click_distance, cfg.ground_mask)?;
    intent.target = hit.point;
    intent.active = true;
    Some(hit.point)
}

/// One frame of pursuit. Emits a step while the planar distance to the
/// target exceeds the stop threshold; otherwise marks arrival and emits
/// nothing.
pub fn step(
    intent: &mut MoveIntent,
    pos: Vec3,
    run: bool,
    dt: f32,
    cfg: &ClickMoveCfg,
) -> Option<MoveStep> {
    if !intent.active {
        return None;
    }
    let mut to = intent.target - pos;
    to.y = 0.0;
    let dist = to.length();
    if dist <= cfg.stop_distance {
        intent.active = false;
        return None;
    }
    let dir = to / dist;
    let speed = if run { cfg.run_speed } else { cfg.walk_speed };
    Some(MoveStep {
        delta: dir * speed * dt,
        face: yaw_facing(dir),
    })
}

/// Immediate interruption (combat, interactions, etc.).
pub fn stop(intent: &mut MoveIntent) {
    intent.active = false;
}
