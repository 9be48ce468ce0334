//! End-to-end: client session frames feed the loopback transport, the
//! server drains and applies, and the authoritative transform is what the
//! client's inputs asked for.

use client_core::input::InputState;
use client_core::session::{ClientSession, LocalPlayerView, SessionCfg};
use glam::{Vec2, Vec3};
use net_core::transport::LoopbackEndpoint;
use server_core::ServerState;
use server_core::tick::drain_client;
use world_core::collision::FlatWorld;
use world_core::components::ClientId;

const DT: f32 = 1.0 / 60.0;

struct Harness {
    session: ClientSession<FlatWorld, LoopbackEndpoint>,
    server: ServerState,
    server_tr: LoopbackEndpoint,
    world: FlatWorld,
    client: ClientId,
}

impl Harness {
    fn new() -> Self {
        let client = ClientId(1);
        let (client_tr, server_tr) = LoopbackEndpoint::pair(256);
        let mut server = ServerState::new();
        server.spawn_player(client, Vec3::ZERO);
        Self {
            session: ClientSession::new(SessionCfg::default(), FlatWorld::new(0.0), client_tr),
            server,
            server_tr,
            world: FlatWorld::new(0.0),
            client,
        }
    }

    fn view(&self) -> Option<LocalPlayerView> {
        self.server.player_of_client(self.client).map(|p| LocalPlayerView {
            position: p.transform.translation,
            grounded: p.grounded,
        })
    }

    fn tick(&mut self, input: &InputState) {
        let view = self.view();
        self.session.frame(input, DT, view);
        drain_client(&mut self.server, &self.world, self.client, &self.server_tr);
    }

    fn pos(&self) -> Vec3 {
        self.server
            .player_of_client(self.client)
            .expect("player")
            .transform
            .translation
    }
}

#[test]
fn third_person_walk_advances_the_authoritative_transform() {
    let mut h = Harness::new();
    let input = InputState {
        move_z: 1.0,
        ..Default::default()
    };
    for _ in 0..60 {
        h.tick(&input);
    }
    // One second at walk speed 5 along the camera forward (+Z).
    let pos = h.pos();
    assert!((pos.z - 5.0).abs() < 0.05);
    assert!(pos.x.abs() < 1e-3);
    assert!(pos.y.abs() < 1e-3, "grounded walk must not drift vertically");
}

#[test]
fn jump_arcs_up_and_lands_back_on_the_ground() {
    let mut h = Harness::new();
    let jump = InputState {
        jump_pressed: true,
        ..Default::default()
    };
    h.tick(&jump);

    let idle = InputState::default();
    let mut peak = 0.0f32;
    for _ in 0..240 {
        h.tick(&idle);
        peak = peak.max(h.pos().y);
    }
    // Jump height 2 with discrete integration; generous bounds.
    assert!(peak > 1.5, "peak {peak} too low");
    let p = h.server.player_of_client(h.client).expect("player");
    assert!(p.transform.translation.y.abs() < 1e-3);
    assert!(p.grounded);
}

#[test]
fn isometric_click_pursuit_arrives_on_the_server() {
    let mut h = Harness::new();
    let toggle = InputState {
        toggle_camera_pressed: true,
        ..Default::default()
    };
    h.tick(&toggle);

    let click = InputState {
        primary_held: true,
        cursor_uv: Vec2::new(0.5, 0.5),
        ..Default::default()
    };
    h.tick(&click);
    let intent = h.session.move_intent();
    assert!(intent.active, "center click on open ground must arm pursuit");
    let target = intent.target;

    let idle = InputState::default();
    for _ in 0..2000 {
        if !h.session.move_intent().active {
            break;
        }
        h.tick(&idle);
    }
    assert!(!h.session.move_intent().active, "pursuit should arrive");
    let pos = h.pos();
    let planar = Vec2::new(target.x - pos.x, target.z - pos.z);
    assert!(planar.length() <= 0.5 + 1e-2);
}
