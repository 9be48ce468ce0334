//! Per-tick command draining: pull every queued datagram off a client's
//! channel and apply the decoded commands in arrival order.
//!
//! Commands from one client are applied in the order sent (the transport
//! preserves per-channel order); commands from different clients have no
//! defined relative ordering. Undecodable datagrams are logged and skipped
//! — the stream stays healthy because each command is independent.

use net_core::command::ClientCmd;
use net_core::datagram;
use net_core::transport::Transport;
use tracing::warn;
use world_core::collision::CharacterSweep;
use world_core::components::ClientId;

use crate::ServerState;

/// Counts for one drain pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainStats {
    pub applied: usize,
    pub rejected: usize,
}

/// Drain all queued datagrams from `client` and apply them.
pub fn drain_client(
    state: &mut ServerState,
    world: &impl CharacterSweep,
    client: ClientId,
    transport: &impl Transport,
) -> DrainStats {
    let mut stats = DrainStats::default();
    while let Some(bytes) = transport.try_recv() {
        match datagram::open::<ClientCmd>(&bytes) {
            Ok(cmd) => {
                state.apply_cmd(world, client, &cmd);
                stats.applied += 1;
            }
            Err(e) => {
                warn!(target: "server", client = client.0, error = %e, "dropping undecodable datagram");
                stats.rejected += 1;
            }
        }
    }
    stats
}
