//! Per-frame client session: wires input, camera, aim, click-to-move, and
//! the relay in a fixed order.
//!
//! Collaborators (collision world, transport) are injected at construction.
//! Until the local player view is available the frame is a deferred no-op,
//! re-checked every frame; never fatal, never timer-based.

use glam::Vec3;
use net_core::command::ClientCmd;
use net_core::transport::Transport;
use tracing::debug;
use world_core::collision::SurfaceRaycast;
use world_core::components::{AimIndicator, CameraMode};

use crate::input::InputState;
use crate::systems::aim::{self, AimCfg, Projection};
use crate::systems::camera::{CameraRig, CameraRigCfg, RigEvent};
use crate::systems::move_intent::{self, ClickMoveCfg, MoveIntent};
use crate::systems::relay::{self, RelayCfg, VerticalMotion};

#[derive(Clone, Copy, Debug, Default)]
pub struct SessionCfg {
    pub rig: CameraRigCfg,
    pub aim: AimCfg,
    pub click: ClickMoveCfg,
    pub relay: RelayCfg,
    pub proj: Projection,
}

/// Read-only view of the locally controlled player for this frame. The
/// position is a projection of the authoritative transform used for camera
/// framing and pursuit math only; it is never fed back as a movement input.
#[derive(Clone, Copy, Debug)]
pub struct LocalPlayerView {
    pub position: Vec3,
    pub grounded: bool,
}

pub struct ClientSession<W, T> {
    cfg: SessionCfg,
    rig: CameraRig,
    screen_aim: AimIndicator,
    aim: AimIndicator,
    intent: MoveIntent,
    vertical: VerticalMotion,
    move_marker: Option<Vec3>,
    events: Vec<RigEvent>,
    world: W,
    transport: T,
}

impl<W: SurfaceRaycast, T: Transport> ClientSession<W, T> {
    #[must_use]
    pub fn new(cfg: SessionCfg, world: W, transport: T) -> Self {
        Self {
            rig: CameraRig::new(cfg.rig),
            screen_aim: AimIndicator::default(),
            aim: AimIndicator::default(),
            intent: MoveIntent::default(),
            vertical: VerticalMotion::default(),
            move_marker: None,
            events: Vec::new(),
            cfg,
            world,
            transport,
        }
    }

    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mode-appropriate aim indicator (camera look-at source).
    #[must_use]
    pub fn aim_indicator(&self) -> AimIndicator {
        self.aim
    }

    /// Screen-center acquisition result, refreshed every frame in both
    /// modes (rendering indicator; third-person authoritative aim).
    #[must_use]
    pub fn screen_aim(&self) -> AimIndicator {
        self.screen_aim
    }

    #[must_use]
    pub fn move_intent(&self) -> MoveIntent {
        self.intent
    }

    /// World position for the move-target marker, while one is shown.
    #[must_use]
    pub fn move_marker(&self) -> Option<Vec3> {
        self.move_marker
    }

    /// Interrupt click-to-move immediately (combat, interactions, etc.).
    pub fn stop_movement(&mut self) {
        move_intent::stop(&mut self.intent);
        self.move_marker = None;
    }

    /// Events published during the most recent frame (mode transitions,
    /// pointer lock requests for the host).
    pub fn drain_events(&mut self) -> Vec<RigEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the session one frame. Rig events published here are
    /// available from `drain_events` until the next `frame` call; events
    /// left undrained are discarded, so the queue never grows unbounded.
    pub fn frame(&mut self, input: &InputState, dt: f32, local: Option<LocalPlayerView>) {
        let Some(view) = local else {
            debug!(target: "session", "local player not yet available; frame deferred");
            return;
        };
        self.events.clear();

        if input.toggle_camera_pressed {
            self.rig.toggle_mode(&mut self.events);
        }
        if input.swap_shoulder_pressed {
            self.rig.swap_shoulder();
        }
        self.rig.apply_pointer_delta(input.pointer_dx, input.pointer_dy);

        // Screen-center acquisition refreshes every frame in both modes.
        let pose = self.rig.pose();
        aim::update_screen_center(&self.world, &pose, &self.cfg.aim, &mut self.screen_aim);

        match self.rig.mode() {
            CameraMode::ThirdPerson => {
                self.aim = self.screen_aim;
                if let Some(step) =
                    relay::third_person_step(input, self.rig.forward(), dt, &self.cfg.relay)
                {
                    relay::send_step(&self.transport, &step);
                }
            }
            CameraMode::Isometric => {
                if input.primary_held
                    && let Some(point) = move_intent::begin_from_click(
                        &self.world,
                        &pose,
                        &self.cfg.proj,
                        input.cursor_uv,
                        &self.cfg.click,
                        &mut self.intent,
                    )
                {
                    self.move_marker = Some(point);
                }
                if let Some(step) =
                    move_intent::step(&mut self.intent, view.position, input.run, dt, &self.cfg.click)
                {
                    relay::send_step(&self.transport, &step);
                }
                if !self.intent.active {
                    self.move_marker = None;
                }
                let target = self.intent.active.then_some(self.intent.target);
                aim::update_look_ahead(
                    &self.world,
                    &self.cfg.aim,
                    view.position,
                    target,
                    &mut self.aim,
                );
            }
        }

        // Vertical term goes out every frame regardless of mode.
        let vertical = self
            .vertical
            .step(view.grounded, input.jump_pressed, dt, &self.cfg.relay);
        relay::send(
            &self.transport,
            &ClientCmd::Move {
                delta: vertical.to_array(),
            },
        );

        let aim = self.aim;
        self.rig.update(dt, view.position, &aim);
    }
}
