//! Component definitions shared across client and server crates.
//!
//! The server owns authoritative mutation of a player's `Transform`; the
//! owning client exclusively writes `CameraMode`, `CameraPose`, and
//! `AimIndicator`. Nothing here enforces that split — the crates do, by
//! construction.

use glam::{Quat, Vec3};

/// Stable player entity identifier (server-assigned).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u32);

/// Connected client identity (session collaborator hands these out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

/// Position + orientation pair. The server-side copy per player is the
/// authoritative transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Quat::IDENTITY,
        }
    }

    /// Facing direction (+Z at identity).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// High-level camera mode. Exactly one value active per local player;
/// mutated only by the rig's explicit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    #[default]
    ThirdPerson,
    Isometric,
}

/// Read-only camera pose for renderer/ray consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub rotation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    /// View direction (+Z at identity rotation).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Current world-space aim point and whether it is valid. Inactive means
/// "fall back to the player position", never stale data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AimIndicator {
    pub world_point: Vec3,
    pub active: bool,
}

/// Yaw-only rotation facing a planar direction (+Z when `dir` is +Z).
/// The vertical component of `dir` is ignored.
#[must_use]
pub fn yaw_facing(dir: Vec3) -> Quat {
    Quat::from_rotation_y(dir.x.atan2(dir.z))
}
