//! Wire encode/decode traits and small read helpers.
//!
//! Intentionally simple: little-endian scalars written by hand. Later
//! phases can swap in better encoders without breaking trait clients.

/// Types implementing wire encoding write themselves into a byte buffer.
pub trait WireEncode {
    fn encode(&self, out: &mut Vec<u8>);
}

/// Types implementing wire decoding reconstruct themselves from a byte
/// slice, advancing it past the consumed bytes.
pub trait WireDecode: Sized {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self>;
}

/// Take `N` bytes off the front of `inp`.
pub fn take<const N: usize>(inp: &mut &[u8]) -> anyhow::Result<[u8; N]> {
    if inp.len() < N {
        anyhow::bail!("short read");
    }
    let (a, b) = inp.split_at(N);
    *inp = b;
    let mut buf = [0u8; N];
    buf.copy_from_slice(a);
    Ok(buf)
}

pub fn take_u8(inp: &mut &[u8]) -> anyhow::Result<u8> {
    Ok(take::<1>(inp)?[0])
}

pub fn take_f32(inp: &mut &[u8]) -> anyhow::Result<f32> {
    Ok(f32::from_le_bytes(take::<4>(inp)?))
}
