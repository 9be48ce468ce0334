use glam::Vec3;
use server_core::{MovementLimits, ServerState};
use world_core::collision::FlatWorld;
use world_core::components::ClientId;

#[test]
fn position_is_start_plus_sum_of_achieved_deltas() {
    let mut s = ServerState::new();
    let world = FlatWorld::new(0.0);
    let id = s.spawn_player(ClientId(1), Vec3::ZERO);

    // Player at origin facing +Z, walk 5, dt 0.1 -> per-frame delta (0,0,0.5).
    for _ in 0..4 {
        s.apply_move(&world, id, Vec3::new(0.0, 0.0, 0.5));
    }
    let p = s.player(id).expect("player");
    assert!((p.transform.translation - Vec3::new(0.0, 0.0, 2.0)).length() < 1e-4);
    assert!(p.grounded);
}

#[test]
fn obstructed_motion_counts_only_achieved_delta() {
    let mut s = ServerState::new();
    let mut world = FlatWorld::new(0.0);
    world.add_blocker(1, Vec3::new(0.9, -0.5, -1.0), Vec3::new(3.0, 2.0, 1.0));
    let id = s.spawn_player(ClientId(1), Vec3::ZERO);

    for _ in 0..10 {
        s.apply_move(&world, id, Vec3::new(0.5, 0.0, 0.0));
    }
    let p = s.player(id).expect("player");
    // The second step would land inside the blocker, so only the first one
    // sticks; the position reflects achieved motion, not requested.
    assert!((p.transform.translation.x - 0.5).abs() < 1e-4);
}

#[test]
fn implausible_delta_is_clamped_not_applied_raw() {
    let mut s = ServerState::new();
    s.limits = MovementLimits { max_delta: 2.5 };
    let world = FlatWorld::new(0.0);
    let id = s.spawn_player(ClientId(1), Vec3::ZERO);

    s.apply_move(&world, id, Vec3::new(100.0, 0.0, 0.0));
    let p = s.player(id).expect("player");
    assert!((p.transform.translation.x - 2.5).abs() < 1e-4);
}

#[test]
fn airborne_then_ground_clamp_reports_grounded() {
    let mut s = ServerState::new();
    let world = FlatWorld::new(0.0);
    let id = s.spawn_player(ClientId(1), Vec3::ZERO);

    s.apply_move(&world, id, Vec3::new(0.0, 1.0, 0.0));
    assert!(!s.player(id).expect("player").grounded);

    s.apply_move(&world, id, Vec3::new(0.0, -2.0, 0.0));
    let p = s.player(id).expect("player");
    assert!(p.transform.translation.y.abs() < 1e-5);
    assert!(p.grounded);
}
