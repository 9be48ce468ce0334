//! Dual-mode camera rig: third-person mouselook / fixed isometric framing.
//!
//! The rig owns the mode state machine. Dependents receive `RigEvent`s from
//! the toggle instead of polling the mode flag, and the host applies the
//! pointer-lock requests (lock+hide while mouselook, unlock+show while
//! isometric).

use glam::{EulerRot, Quat, Vec3};
use tracing::info;
use world_core::components::{AimIndicator, CameraMode, CameraPose};

#[derive(Clone, Copy, Debug)]
pub struct CameraRigCfg {
    /// Third-person boom length behind the player.
    pub boom_len: f32,
    /// Eye height above the player origin.
    pub boom_height: f32,
    /// Lateral shoulder offset magnitude; sign follows the active shoulder.
    pub shoulder_offset: f32,
    pub sensitivity_deg_per_count: f32,
    pub invert_y: bool,
    /// Pitch clamp, positive looks up (so -60 allows looking 60 deg down).
    pub min_pitch_deg: f32,
    pub max_pitch_deg: f32,
    pub initial_pitch_deg: f32,
    /// Isometric downward tilt and horizontal rotation.
    pub iso_pitch_deg: f32,
    pub iso_yaw_deg: f32,
    pub iso_distance: f32,
    /// Exponential approach rate for the isometric pose (per second).
    pub transition_speed: f32,
    /// Exponential approach rate for shoulder swaps (per second).
    pub shoulder_switch_speed: f32,
}

impl Default for CameraRigCfg {
    fn default() -> Self {
        Self {
            boom_len: 5.0,
            boom_height: 1.5,
            shoulder_offset: 0.5,
            sensitivity_deg_per_count: 0.15,
            invert_y: false,
            min_pitch_deg: -60.0,
            max_pitch_deg: 30.0,
            initial_pitch_deg: -20.0,
            iso_pitch_deg: 45.0,
            iso_yaw_deg: 45.0,
            iso_distance: 20.0,
            transition_speed: 5.0,
            shoulder_switch_speed: 8.0,
        }
    }
}

/// Events published by the rig for the host / dependents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RigEvent {
    ModeChanged { from: CameraMode, to: CameraMode },
    /// true = lock and hide the pointer (mouselook), false = release it.
    PointerLockRequest(bool),
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    cfg: CameraRigCfg,
    mode: CameraMode,
    yaw: f32,
    pitch: f32,
    right_shoulder: bool,
    shoulder: f32,
    pose: CameraPose,
}

impl CameraRig {
    #[must_use]
    pub fn new(cfg: CameraRigCfg) -> Self {
        Self {
            mode: CameraMode::ThirdPerson,
            yaw: 0.0,
            pitch: cfg.initial_pitch_deg.to_radians(),
            right_shoulder: true,
            shoulder: cfg.shoulder_offset,
            pose: CameraPose::default(),
            cfg,
        }
    }

    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Heading appropriate to the mode: yaw-derived in third-person, a fixed
    /// world diagonal in isometric (isometric movement is axis-aligned, not
    /// camera-relative).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        match self.mode {
            CameraMode::ThirdPerson => Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos()),
            CameraMode::Isometric => Vec3::new(1.0, 0.0, 1.0).normalize(),
        }
    }

    /// Flip the camera mode and publish the transition + pointer policy.
    pub fn toggle_mode(&mut self, out: &mut Vec<RigEvent>) {
        let from = self.mode;
        self.mode = match self.mode {
            CameraMode::ThirdPerson => CameraMode::Isometric,
            CameraMode::Isometric => CameraMode::ThirdPerson,
        };
        info!(target: "camera", from = ?from, to = ?self.mode, reason = "toggle");
        out.push(RigEvent::ModeChanged {
            from,
            to: self.mode,
        });
        out.push(RigEvent::PointerLockRequest(
            self.mode == CameraMode::ThirdPerson,
        ));
    }

    /// Swap the shoulder the boom leans over. No-op outside third-person.
    pub fn swap_shoulder(&mut self) {
        if self.mode == CameraMode::ThirdPerson {
            self.right_shoulder = !self.right_shoulder;
        }
    }

    /// Accumulate mouselook from raw pointer counts. No-op outside
    /// third-person.
    pub fn apply_pointer_delta(&mut self, dx: f32, dy: f32) {
        if self.mode != CameraMode::ThirdPerson {
            return;
        }
        let to_rad = self.cfg.sensitivity_deg_per_count.to_radians();
        self.yaw += dx * to_rad;
        let dy = if self.cfg.invert_y { dy } else { -dy };
        self.pitch = (self.pitch + dy * to_rad).clamp(
            self.cfg.min_pitch_deg.to_radians(),
            self.cfg.max_pitch_deg.to_radians(),
        );
    }

    /// Per-frame pose update. Third-person applies instantly (mouselook must
    /// feel 1:1); isometric eases toward the target pose since the look-at
    /// point can jump when a new click target is issued.
    pub fn update(&mut self, dt: f32, player_pos: Vec3, aim: &AimIndicator) {
        match self.mode {
            CameraMode::ThirdPerson => {
                let target = if self.right_shoulder {
                    self.cfg.shoulder_offset
                } else {
                    -self.cfg.shoulder_offset
                };
                let k = 1.0 - (-self.cfg.shoulder_switch_speed * dt).exp();
                self.shoulder += (target - self.shoulder) * k;

                let rot = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
                let offset = rot * Vec3::new(self.shoulder, 0.0, -self.cfg.boom_len);
                self.pose = CameraPose {
                    eye: player_pos + Vec3::Y * self.cfg.boom_height + offset,
                    rotation: rot,
                };
            }
            CameraMode::Isometric => {
                let look_at = if aim.active {
                    aim.world_point
                } else {
                    player_pos
                };
                let rot = Quat::from_euler(
                    EulerRot::YXZ,
                    self.cfg.iso_yaw_deg.to_radians(),
                    self.cfg.iso_pitch_deg.to_radians(),
                    0.0,
                );
                let target_eye = look_at - rot * Vec3::Z * self.cfg.iso_distance;
                let k = 1.0 - (-self.cfg.transition_speed * dt).exp();
                self.pose.eye = self.pose.eye.lerp(target_eye, k);
                self.pose.rotation = self.pose.rotation.slerp(rot, k);
            }
        }
    }
}
