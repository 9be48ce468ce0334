//! Movement relay: formats per-frame movement/rotation intents and sends
//! them across the trust boundary.
//!
//! Horizontal and vertical motion are relayed as independent commands so
//! the server applies both within the same tick. Sends are fire-and-forget:
//! a full or closed channel is a skipped frame of motion, self-correcting
//! because every frame emits fresh independent commands.

use glam::Vec3;
use net_core::command::ClientCmd;
use net_core::datagram;
use net_core::transport::Transport;
use tracing::debug;
use world_core::components::yaw_facing;

use super::MoveStep;
use crate::input::InputState;

#[derive(Clone, Copy, Debug)]
pub struct RelayCfg {
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Minimum input magnitude that produces a move command.
    pub deadzone: f32,
    pub gravity: f32,
    pub jump_height: f32,
}

impl Default for RelayCfg {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            deadzone: 0.1,
            gravity: -20.0,
            jump_height: 2.0,
        }
    }
}

/// Map third-person input axes through the camera's planar basis into one
/// movement step. Below the deadzone nothing is emitted.
#[must_use]
pub fn third_person_step(
    input: &InputState,
    cam_forward: Vec3,
    dt: f32,
    cfg: &RelayCfg,
) -> Option<MoveStep> {
    let mut fwd = cam_forward;
    fwd.y = 0.0;
    let fwd = fwd.normalize_or_zero();
    let right = Vec3::new(fwd.z, 0.0, -fwd.x);
    let dir = fwd * input.move_z + right * input.move_x;
    if dir.length() < cfg.deadzone {
        return None;
    }
    let dir = dir.normalize();
    let speed = if input.run {
        cfg.run_speed
    } else {
        cfg.walk_speed
    };
    Some(MoveStep {
        delta: dir * speed * dt,
        face: yaw_facing(dir),
    })
}

/// Accumulated vertical motion: gravity, grounded bias, jump impulse.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalMotion {
    vel_y: f32,
}

impl VerticalMotion {
    /// One frame of vertical integration; the returned delta is relayed
    /// every frame regardless of camera mode.
    pub fn step(&mut self, grounded: bool, jump_pressed: bool, dt: f32, cfg: &RelayCfg) -> Vec3 {
        if grounded && self.vel_y < 0.0 {
            // Small downward bias keeps the character pressed to the ground.
            self.vel_y = -2.0;
        }
        if grounded && jump_pressed {
            self.vel_y = (2.0 * cfg.jump_height * -cfg.gravity).sqrt();
        }
        self.vel_y += cfg.gravity * dt;
        Vec3::new(0.0, self.vel_y * dt, 0.0)
    }

    #[must_use]
    pub fn velocity_y(&self) -> f32 {
        self.vel_y
    }
}

/// Seal and send one command. Fire-and-forget: errors are debug-logged and
/// otherwise ignored.
pub fn send(transport: &dyn Transport, cmd: &ClientCmd) {
    if let Err(e) = transport.try_send(datagram::seal(cmd)) {
        debug!(target: "relay", error = ?e, "dropped outgoing command");
    }
}

/// Send one movement step as a Move + Face command pair.
pub fn send_step(transport: &dyn Transport, step: &MoveStep) {
    send(
        transport,
        &ClientCmd::Move {
            delta: step.delta.to_array(),
        },
    );
    send(
        transport,
        &ClientCmd::Face {
            rot: step.face.to_array(),
        },
    );
}
