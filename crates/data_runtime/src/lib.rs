//! data_runtime: config schemas and loaders.
//!
//! Camera and movement tunables live in TOML under `data/config/` so they
//! can be adjusted without recompiling; every field is optional and falls
//! back to the built-in default.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod configs {
    pub mod camera;
    pub mod movement;
}

use std::path::PathBuf;

/// Locate the workspace `data/` directory. Works from a crate dir during
/// tests and from the workspace root when run as a binary.
#[must_use]
pub fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
