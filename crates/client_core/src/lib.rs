//! Client glue: per-frame input snapshot, camera rig, aim acquisition,
//! click-to-move, and the movement relay toward the server.
//!
//! Everything here runs on the owning client only. The server never writes
//! any of this state; the client never writes the authoritative transform.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]

pub mod input {
    use glam::Vec2;

    /// Input snapshot for one frame of local player intent.
    ///
    /// - `move_x`/`move_z` are the strafe/forward axes (right/forward
    ///   positive), consumed only in third-person mode
    /// - `primary_held` drives click-to-move while isometric; `cursor_uv`
    ///   is the pointer position in normalized viewport coordinates
    /// - `pointer_dx`/`pointer_dy` are raw pointer counts for mouselook
    #[derive(Default, Debug, Clone, Copy)]
    pub struct InputState {
        pub move_x: f32,
        pub move_z: f32,
        pub run: bool,
        /// One-shot jump press for this frame. The host should set this on
        /// key-press and clear it after the frame so holding the key does
        /// not repeat-jump.
        pub jump_pressed: bool,
        pub pointer_dx: f32,
        pub pointer_dy: f32,
        pub primary_held: bool,
        pub cursor_uv: Vec2,
        pub toggle_camera_pressed: bool,
        pub swap_shoulder_pressed: bool,
    }

    impl InputState {
        pub fn clear(&mut self) {
            *self = Self::default();
        }
    }
}

pub mod session;
pub mod systems;
pub mod telemetry;
