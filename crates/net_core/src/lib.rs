//! `net_core`: wire codec + client->server command plumbing.
//!
//! Scope
//! - `codec`: minimal encode/decode traits shared by wire messages
//! - `command`: movement/rotation commands with a tagged byte encoding
//! - `datagram`: version-prefixed one-command-per-datagram sealing
//! - `channel`/`transport`: byte channels and the transport abstraction
//!   (in-proc loopback implementation; a remote transport plugs in behind
//!   the same trait)

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod channel;
pub mod codec;
pub mod command;
pub mod datagram;
pub mod transport;
