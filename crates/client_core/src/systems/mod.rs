//! Client-side systems: camera rig, aim acquisition, click-to-move, and the
//! movement relay. Pure, testable logic the host loop delegates to.

use glam::{Quat, Vec3};

pub mod aim;
pub mod camera;
pub mod move_intent;
pub mod relay;

/// One frame's worth of horizontal motion: a translation delta plus the
/// facing rotation to request alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveStep {
    pub delta: Vec3,
    pub face: Quat,
}
