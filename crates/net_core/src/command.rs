//! Client->Server movement commands (authoritative input relay).
//! Minimal binary encoding with a leading tag byte.
//!
//! Each command is ephemeral: applied exactly once by the server and
//! discarded. A dropped command is a skipped frame of motion; the next
//! frame's command is independent and not compensated.

use crate::codec::{WireDecode, WireEncode, take_f32, take_u8};

pub const TAG_CLIENT_CMD: u8 = 0xC2;

const KIND_MOVE: u8 = 0;
const KIND_FACE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientCmd {
    /// Desired translation delta for this frame (meters).
    Move { delta: [f32; 3] },
    /// Target facing rotation (unit quaternion, xyzw).
    Face { rot: [f32; 4] },
}

impl WireEncode for ClientCmd {
    fn encode(&self, out: &mut Vec<u8>) {
        out.push(TAG_CLIENT_CMD);
        match self {
            ClientCmd::Move { delta } => {
                out.push(KIND_MOVE);
                for c in delta {
                    out.extend_from_slice(&c.to_le_bytes());
                }
            }
            ClientCmd::Face { rot } => {
                out.push(KIND_FACE);
                for c in rot {
                    out.extend_from_slice(&c.to_le_bytes());
                }
            }
        }
    }
}

impl WireDecode for ClientCmd {
    fn decode(inp: &mut &[u8]) -> anyhow::Result<Self> {
        use anyhow::bail;
        let tag = take_u8(inp)?;
        if tag != TAG_CLIENT_CMD {
            bail!("not a client cmd tag: {tag:#04x}");
        }
        match take_u8(inp)? {
            KIND_MOVE => {
                let mut delta = [0.0f32; 3];
                for v in &mut delta {
                    *v = take_f32(inp)?;
                }
                Ok(Self::Move { delta })
            }
            KIND_FACE => {
                let mut rot = [0.0f32; 4];
                for v in &mut rot {
                    *v = take_f32(inp)?;
                }
                Ok(Self::Face { rot })
            }
            kind => bail!("unknown client cmd kind: {kind}"),
        }
    }
}
