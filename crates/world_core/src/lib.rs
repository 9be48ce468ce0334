//! `world_core`: components shared across client and server, plus the
//! physics-collaborator traits the rest of the stack is written against.
//!
//! The actual collision backend is out of scope; `collision::FlatWorld` is a
//! deterministic stand-in (ground plane + axis-aligned blockers) used by
//! tests and the demo binary.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collision;
pub mod components;

#[cfg(test)]
mod tests {
    #[test]
    fn compiles_and_links() {
        assert_eq!(2 + 2, 4);
    }
}
