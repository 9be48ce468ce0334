//! Session-level behavior against the loopback transport: what actually
//! goes out on the wire each frame.

use client_core::input::InputState;
use client_core::session::{ClientSession, LocalPlayerView, SessionCfg};
use client_core::systems::camera::RigEvent;
use glam::{Vec2, Vec3};
use net_core::command::ClientCmd;
use net_core::datagram;
use net_core::transport::{LoopbackEndpoint, Transport};
use world_core::collision::FlatWorld;

fn drain_cmds(t: &impl Transport) -> Vec<ClientCmd> {
    let mut out = Vec::new();
    while let Some(bytes) = t.try_recv() {
        out.push(datagram::open::<ClientCmd>(&bytes).expect("open"));
    }
    out
}

fn grounded_at(pos: Vec3) -> Option<LocalPlayerView> {
    Some(LocalPlayerView {
        position: pos,
        grounded: true,
    })
}

#[test]
fn frame_without_local_player_sends_nothing() {
    let (client_tr, server_tr) = LoopbackEndpoint::pair(64);
    let world = FlatWorld::new(0.0);
    let mut session = ClientSession::new(SessionCfg::default(), world, client_tr);
    session.frame(&InputState::default(), 0.016, None);
    assert_eq!(server_tr.depth(), 0);
}

#[test]
fn third_person_forward_emits_move_face_and_vertical() {
    let (client_tr, server_tr) = LoopbackEndpoint::pair(64);
    let world = FlatWorld::new(0.0);
    let mut session = ClientSession::new(SessionCfg::default(), world, client_tr);

    let input = InputState {
        move_z: 1.0,
        ..Default::default()
    };
    session.frame(&input, 0.1, grounded_at(Vec3::ZERO));

    let cmds = drain_cmds(&server_tr);
    assert_eq!(cmds.len(), 3);
    let ClientCmd::Move { delta } = cmds[0] else {
        panic!("expected horizontal move first");
    };
    assert!((Vec3::from_array(delta) - Vec3::new(0.0, 0.0, 0.5)).length() < 1e-4);
    assert!(matches!(cmds[1], ClientCmd::Face { .. }));
    let ClientCmd::Move { delta } = cmds[2] else {
        panic!("expected vertical move last");
    };
    assert!(delta[0].abs() < 1e-6 && delta[2].abs() < 1e-6);
}

#[test]
fn idle_frame_still_relays_the_vertical_term() {
    let (client_tr, server_tr) = LoopbackEndpoint::pair(64);
    let world = FlatWorld::new(0.0);
    let mut session = ClientSession::new(SessionCfg::default(), world, client_tr);
    session.frame(&InputState::default(), 0.1, grounded_at(Vec3::ZERO));
    let cmds = drain_cmds(&server_tr);
    assert_eq!(cmds.len(), 1);
    assert!(matches!(cmds[0], ClientCmd::Move { .. }));
}

#[test]
fn undrained_rig_events_do_not_accumulate_across_frames() {
    let (client_tr, _server_tr) = LoopbackEndpoint::pair(64);
    let world = FlatWorld::new(0.0);
    let mut session = ClientSession::new(SessionCfg::default(), world, client_tr);

    let toggle = InputState {
        toggle_camera_pressed: true,
        ..Default::default()
    };
    session.frame(&toggle, 0.016, grounded_at(Vec3::ZERO));
    session.frame(&toggle, 0.016, grounded_at(Vec3::ZERO));

    // Two toggles happened, but only the latest frame's pair survives.
    let events = session.drain_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(events[0], RigEvent::ModeChanged { .. }));
    assert!(session.drain_events().is_empty());
}

#[test]
fn isometric_click_drives_commands_until_arrival() {
    let (client_tr, server_tr) = LoopbackEndpoint::pair(1024);
    let world = FlatWorld::new(0.0);
    let mut session = ClientSession::new(SessionCfg::default(), world, client_tr);

    let toggle = InputState {
        toggle_camera_pressed: true,
        ..Default::default()
    };
    session.frame(&toggle, 0.016, grounded_at(Vec3::ZERO));
    let events = session.drain_events();
    assert!(
        events
            .iter()
            .any(|e| matches!(e, RigEvent::PointerLockRequest(false)))
    );
    drain_cmds(&server_tr);

    // Click at screen center: the isometric camera looks at the player, so
    // the ray lands on walkable ground.
    let click = InputState {
        primary_held: true,
        cursor_uv: Vec2::new(0.5, 0.5),
        ..Default::default()
    };
    let mut pos = Vec3::ZERO;
    session.frame(&click, 0.016, grounded_at(pos));
    let target = session.move_intent();
    assert!(target.active);
    assert!(session.move_marker().is_some());

    // Pursue until arrival, applying horizontal deltas locally.
    let idle = InputState::default();
    for _ in 0..2000 {
        for cmd in drain_cmds(&server_tr) {
            if let ClientCmd::Move { delta } = cmd {
                pos.x += delta[0];
                pos.z += delta[2];
            }
        }
        if !session.move_intent().active {
            break;
        }
        session.frame(&idle, 0.016, grounded_at(pos));
    }
    assert!(!session.move_intent().active, "pursuit should arrive");
    assert!(session.move_marker().is_none());
    let planar = Vec3::new(target.target.x - pos.x, 0.0, target.target.z - pos.z);
    assert!(planar.length() <= 0.5 + 1e-3);
}
