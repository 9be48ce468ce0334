//! Byte channels for command messages.
//!
//! Thin wrappers over crossbeam bounded channels with non-blocking send and
//! drain helpers. Delivery order within a channel is preserved; a full or
//! disconnected channel simply drops the message at the sender.

use crossbeam_channel::{Receiver, Sender, bounded, unbounded};

/// Why a non-blocking send failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendFailure {
    /// The channel is at capacity; the message was dropped.
    Full,
    /// The receiver is gone; nothing will ever be delivered again.
    Closed,
}

#[derive(Clone)]
pub struct Tx(Sender<Vec<u8>>);

#[derive(Clone)]
pub struct Rx(Receiver<Vec<u8>>);

/// Create a sender/receiver pair. The underlying channel is unbounded.
#[must_use]
pub fn channel() -> (Tx, Rx) {
    let (s, r) = unbounded::<Vec<u8>>();
    (Tx(s), Rx(r))
}

/// Create a bounded sender/receiver pair.
#[must_use]
pub fn channel_bounded(capacity: usize) -> (Tx, Rx) {
    let (s, r) = bounded::<Vec<u8>>(capacity);
    (Tx(s), Rx(r))
}

impl Tx {
    /// Non-blocking send; on failure the message is dropped and the reason
    /// reported so the sender can log it.
    pub fn try_send(&self, bytes: Vec<u8>) -> Result<(), SendFailure> {
        use crossbeam_channel::TrySendError;
        self.0.try_send(bytes).map_err(|e| match e {
            TrySendError::Full(_) => SendFailure::Full,
            TrySendError::Disconnected(_) => SendFailure::Closed,
        })
    }
}

impl Rx {
    /// Non-blocking receive of a single message.
    #[must_use]
    pub fn try_recv(&self) -> Option<Vec<u8>> {
        self.0.try_recv().ok()
    }

    /// Drain all currently queued messages.
    #[must_use]
    pub fn drain(&self) -> Vec<Vec<u8>> {
        let mut out = Vec::new();
        while let Some(b) = self.try_recv() {
            out.push(b);
        }
        out
    }

    /// Number of messages currently queued.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}
