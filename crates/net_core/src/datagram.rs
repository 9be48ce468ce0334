//! Datagram sealing: one command per datagram, one version byte up front.
//!
//! Commands are tiny and self-delimiting (tag byte, kind byte, fixed-size
//! body), so there is no length framing: a datagram is the protocol
//! version byte followed by exactly one encoded message. Trailing bytes
//! mean a corrupt or mis-sealed datagram and reject the whole thing.

use crate::codec::{WireDecode, WireEncode, take_u8};

pub const PROTO_VERSION: u8 = 1;

/// Hard cap on accepted datagrams. The largest command today is `Face`
/// (version + tag + kind + four f32s = 19 bytes); the cap leaves headroom
/// for future command kinds without admitting junk.
pub const MAX_DATAGRAM_LEN: usize = 64;

/// Seal one message into a fresh datagram.
#[must_use]
pub fn seal(msg: &impl WireEncode) -> Vec<u8> {
    let mut out = vec![PROTO_VERSION];
    msg.encode(&mut out);
    out
}

/// Open a datagram and decode the single message inside it.
pub fn open<T: WireDecode>(datagram: &[u8]) -> anyhow::Result<T> {
    use anyhow::bail;
    if datagram.len() > MAX_DATAGRAM_LEN {
        bail!("datagram too large: {} > {MAX_DATAGRAM_LEN}", datagram.len());
    }
    let mut inp = datagram;
    let ver = take_u8(&mut inp)?;
    if ver != PROTO_VERSION {
        bail!("unsupported protocol version: {ver}");
    }
    let msg = T::decode(&mut inp)?;
    if !inp.is_empty() {
        bail!("{} trailing bytes after message", inp.len());
    }
    Ok(msg)
}
