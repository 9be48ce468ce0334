//! Transport seam between a client session and the server it talks to.
//!
//! One lossy ordered lane per direction: datagrams arrive at the peer in
//! send order or not at all, and neither side is told about drops. The
//! demo and tests run both endpoints in process over bounded byte
//! channels; a socket-backed endpoint would sit behind the same trait.

use crate::channel::{Rx, SendFailure, Tx, channel_bounded};

pub trait Transport: Send + Sync {
    /// Queue one datagram toward the peer. Failure is not an error to
    /// recover from; callers log and move on.
    fn try_send(&self, bytes: Vec<u8>) -> Result<(), SendFailure>;
    /// Next datagram queued toward this endpoint, if any.
    fn try_recv(&self) -> Option<Vec<u8>>;
    /// Datagrams currently queued toward this endpoint.
    fn depth(&self) -> usize;
}

/// In-process endpoint over bounded byte channels.
pub struct LoopbackEndpoint {
    outgoing: Tx,
    incoming: Rx,
}

impl LoopbackEndpoint {
    /// Connected endpoint pair with `capacity` datagrams of buffering per
    /// direction. What the first endpoint sends, the second receives, and
    /// vice versa.
    #[must_use]
    pub fn pair(capacity: usize) -> (Self, Self) {
        let (to_server, from_client) = channel_bounded(capacity);
        let (to_client, from_server) = channel_bounded(capacity);
        (
            Self {
                outgoing: to_server,
                incoming: from_server,
            },
            Self {
                outgoing: to_client,
                incoming: from_client,
            },
        )
    }
}

impl Transport for LoopbackEndpoint {
    fn try_send(&self, bytes: Vec<u8>) -> Result<(), SendFailure> {
        self.outgoing.try_send(bytes)
    }
    fn try_recv(&self) -> Option<Vec<u8>> {
        self.incoming.try_recv()
    }
    fn depth(&self) -> usize {
        self.incoming.depth()
    }
}
