//! Headless demo: one client session and an authoritative server joined by
//! the in-process loopback transport.
//!
//! Runs a scripted input sequence — third-person walk and jump, camera
//! toggle, isometric click-to-move — and logs the authoritative transform
//! as it advances. `LOG_LEVEL=debug cargo run` shows per-frame detail.

#![deny(warnings, clippy::all, clippy::pedantic)]

use anyhow::Result;
use client_core::input::InputState;
use client_core::session::{ClientSession, LocalPlayerView, SessionCfg};
use client_core::systems::aim::{AimCfg, Projection};
use client_core::systems::camera::{CameraRigCfg, RigEvent};
use client_core::systems::move_intent::ClickMoveCfg;
use client_core::systems::relay::RelayCfg;
use glam::{Vec2, Vec3};
use net_core::transport::LoopbackEndpoint;
use server_core::ServerState;
use server_core::tick::drain_client;
use tracing::info;
use world_core::collision::FlatWorld;
use world_core::components::ClientId;

const DT: f32 = 1.0 / 60.0;

fn session_cfg() -> SessionCfg {
    let cam = data_runtime::configs::camera::load_default().unwrap_or_default();
    let mv = data_runtime::configs::movement::load_default().unwrap_or_default();
    let rig = CameraRigCfg::default();
    let click = ClickMoveCfg::default();
    let relay = RelayCfg::default();
    SessionCfg {
        rig: CameraRigCfg {
            boom_len: cam.boom_length.unwrap_or(rig.boom_len),
            boom_height: cam.boom_height.unwrap_or(rig.boom_height),
            shoulder_offset: cam.shoulder_offset.unwrap_or(rig.shoulder_offset),
            sensitivity_deg_per_count: cam
                .sensitivity_deg_per_count
                .unwrap_or(rig.sensitivity_deg_per_count),
            invert_y: cam.invert_y.unwrap_or(rig.invert_y),
            min_pitch_deg: cam.min_pitch_deg.unwrap_or(rig.min_pitch_deg),
            max_pitch_deg: cam.max_pitch_deg.unwrap_or(rig.max_pitch_deg),
            initial_pitch_deg: cam.initial_pitch_deg.unwrap_or(rig.initial_pitch_deg),
            iso_pitch_deg: cam.iso_pitch_deg.unwrap_or(rig.iso_pitch_deg),
            iso_yaw_deg: cam.iso_yaw_deg.unwrap_or(rig.iso_yaw_deg),
            iso_distance: cam.iso_distance.unwrap_or(rig.iso_distance),
            transition_speed: cam.transition_speed.unwrap_or(rig.transition_speed),
            shoulder_switch_speed: cam
                .shoulder_switch_speed
                .unwrap_or(rig.shoulder_switch_speed),
        },
        aim: AimCfg::default(),
        click: ClickMoveCfg {
            walk_speed: mv.walk_speed.unwrap_or(click.walk_speed),
            run_speed: mv.run_speed.unwrap_or(click.run_speed),
            stop_distance: mv.stop_distance.unwrap_or(click.stop_distance),
            ..click
        },
        relay: RelayCfg {
            walk_speed: mv.walk_speed.unwrap_or(relay.walk_speed),
            run_speed: mv.run_speed.unwrap_or(relay.run_speed),
            deadzone: mv.deadzone.unwrap_or(relay.deadzone),
            gravity: mv.gravity.unwrap_or(relay.gravity),
            jump_height: mv.jump_height.unwrap_or(relay.jump_height),
        },
        proj: Projection::default(),
    }
}

fn scene() -> FlatWorld {
    let mut world = FlatWorld::new(0.0);
    world.add_blocker(1, Vec3::new(6.0, 0.0, -2.0), Vec3::new(8.0, 3.0, 2.0));
    world
}

fn main() -> Result<()> {
    client_core::telemetry::init_client_telemetry();

    let client = ClientId(1);
    let (client_tr, server_tr) = LoopbackEndpoint::pair(256);
    let mut server = ServerState::new();
    server.spawn_player(client, Vec3::ZERO);
    let server_world = scene();
    let mut session = ClientSession::new(session_cfg(), scene(), client_tr);

    let view = |server: &ServerState| -> Option<LocalPlayerView> {
        server.player_of_client(client).map(|p| LocalPlayerView {
            position: p.transform.translation,
            grounded: p.grounded,
        })
    };
    let report = |server: &ServerState, phase: &str| {
        if let Some(p) = server.player_of_client(client) {
            info!(target: "demo", phase, pos = ?p.transform.translation, grounded = p.grounded);
        }
    };

    // Phase 1: third-person forward walk with a jump partway through.
    for frame in 0..120 {
        let input = InputState {
            move_z: 1.0,
            jump_pressed: frame == 30,
            ..Default::default()
        };
        session.frame(&input, DT, view(&server));
        drain_client(&mut server, &server_world, client, &server_tr);
    }
    report(&server, "walk+jump");

    // Phase 2: toggle into isometric framing.
    let toggle = InputState {
        toggle_camera_pressed: true,
        ..Default::default()
    };
    session.frame(&toggle, DT, view(&server));
    drain_client(&mut server, &server_world, client, &server_tr);
    for event in session.drain_events() {
        match event {
            RigEvent::ModeChanged { from, to } => {
                info!(target: "demo", ?from, ?to, "camera mode changed");
            }
            RigEvent::PointerLockRequest(lock) => {
                info!(target: "demo", lock, "pointer lock request");
            }
        }
    }

    // Phase 3: click at screen center, then pursue until arrival.
    let click = InputState {
        primary_held: true,
        cursor_uv: Vec2::new(0.5, 0.5),
        ..Default::default()
    };
    session.frame(&click, DT, view(&server));
    drain_client(&mut server, &server_world, client, &server_tr);
    if let Some(marker) = session.move_marker() {
        info!(target: "demo", ?marker, "move target acquired");
    }

    let idle = InputState::default();
    for _ in 0..2000 {
        if !session.move_intent().active {
            break;
        }
        session.frame(&idle, DT, view(&server));
        drain_client(&mut server, &server_world, client, &server_tr);
    }
    report(&server, "click-to-move");

    Ok(())
}
