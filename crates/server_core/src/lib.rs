//! Authoritative movement executor.
//!
//! The server owns the canonical transform for every player entity and
//! mutates it only through received movement/rotation commands. Movement is
//! resolved through the same swept character primitive the collision
//! backend exposes to clients, so client-requested motion is
//! collision-aware on arrival even though the requesting client performed
//! no check itself.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use glam::{Quat, Vec3};
use net_core::command::ClientCmd;
use tracing::warn;
use world_core::collision::CharacterSweep;
use world_core::components::{ClientId, PlayerId, Transform};

pub mod tick;

/// Fixed blend factor applied per received rotation command. Rotation never
/// snaps; discrete commands still produce smooth turning.
pub const ROTATION_BLEND: f32 = 0.2;

/// Per-command plausibility bound on movement deltas. The original design
/// trusted clients fully; deltas are now clamped to the fastest legitimate
/// per-frame motion (run speed or jump impulse at a generous frame time)
/// and violations are logged.
#[derive(Debug, Clone, Copy)]
pub struct MovementLimits {
    pub max_delta: f32,
}

impl Default for MovementLimits {
    fn default() -> Self {
        Self { max_delta: 2.5 }
    }
}

/// A connected player entity and its canonical transform.
#[derive(Debug, Clone)]
pub struct PlayerEntity {
    pub id: PlayerId,
    pub owner: ClientId,
    pub transform: Transform,
    pub grounded: bool,
}

/// Authoritative server state: the single writer for player transforms.
#[derive(Debug, Default)]
pub struct ServerState {
    next_id: u32,
    pub players: Vec<PlayerEntity>,
    pub limits: MovementLimits,
}

impl ServerState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            players: Vec::new(),
            limits: MovementLimits::default(),
        }
    }

    /// Register a player entity controlled by `owner`.
    pub fn spawn_player(&mut self, owner: ClientId, pos: Vec3) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        self.players.push(PlayerEntity {
            id,
            owner,
            transform: Transform::from_translation(pos),
            grounded: true,
        });
        id
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&PlayerEntity> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn player_of_client(&self, owner: ClientId) -> Option<&PlayerEntity> {
        self.players.iter().find(|p| p.owner == owner)
    }

    /// Apply a movement delta to `id` through the swept primitive. The
    /// achieved (collision-resolved) delta mutates the transform.
    pub fn apply_move(&mut self, world: &impl CharacterSweep, id: PlayerId, delta: Vec3) {
        let max = self.limits.max_delta;
        let Some(p) = self.players.iter_mut().find(|p| p.id == id) else {
            warn!(target: "server", id = id.0, "move for unknown player");
            return;
        };
        let len = delta.length();
        let desired = if len > max {
            warn!(
                target: "server",
                id = id.0,
                requested = len,
                clamp = max,
                "implausible move delta clamped"
            );
            delta * (max / len)
        } else {
            delta
        };
        let result = world.move_character(p.transform.translation, desired);
        p.transform.translation += result.achieved;
        p.grounded = result.grounded;
    }

    /// Blend the authoritative rotation toward a received facing target.
    pub fn apply_face(&mut self, id: PlayerId, target: Quat) {
        let Some(p) = self.players.iter_mut().find(|p| p.id == id) else {
            warn!(target: "server", id = id.0, "face for unknown player");
            return;
        };
        p.transform.rotation = p.transform.rotation.slerp(target, ROTATION_BLEND);
    }

    /// Route one decoded command from `client` to the entity it controls.
    /// Commands from unknown clients are logged and dropped.
    pub fn apply_cmd(&mut self, world: &impl CharacterSweep, client: ClientId, cmd: &ClientCmd) {
        let Some(id) = self.player_of_client(client).map(|p| p.id) else {
            warn!(target: "server", client = client.0, "command from unknown client");
            return;
        };
        match cmd {
            ClientCmd::Move { delta } => self.apply_move(world, id, Vec3::from_array(*delta)),
            ClientCmd::Face { rot } => self.apply_face(id, Quat::from_array(*rot)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use world_core::collision::FlatWorld;

    #[test]
    fn spawn_assigns_unique_ids() {
        let mut s = ServerState::new();
        let a = s.spawn_player(ClientId(1), Vec3::ZERO);
        let b = s.spawn_player(ClientId(2), Vec3::ZERO);
        assert_ne!(a, b);
        assert_eq!(s.player_of_client(ClientId(2)).map(|p| p.id), Some(b));
    }

    #[test]
    fn unknown_client_command_is_dropped() {
        let mut s = ServerState::new();
        let world = FlatWorld::new(0.0);
        s.spawn_player(ClientId(1), Vec3::ZERO);
        s.apply_cmd(
            &world,
            ClientId(99),
            &ClientCmd::Move {
                delta: [1.0, 0.0, 0.0],
            },
        );
        let p = s.player_of_client(ClientId(1)).expect("player");
        assert!(p.transform.translation.length() < 1e-6);
    }
}
