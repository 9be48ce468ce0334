use client_core::systems::move_intent::{ClickMoveCfg, MoveIntent, begin_from_click, step};
use glam::{EulerRot, Quat, Vec2, Vec3};
use world_core::collision::{FlatWorld, LayerMask};
use world_core::components::CameraPose;

use client_core::systems::aim::Projection;

#[test]
fn pursuit_strictly_decreases_distance_then_arrives() {
    let cfg = ClickMoveCfg::default();
    let mut intent = MoveIntent {
        target: Vec3::new(10.0, 0.0, 0.0),
        active: true,
    };
    let mut pos = Vec3::ZERO;
    let dt = 0.1;
    let mut last = (intent.target - pos).length();
    let mut frames = 0;
    while intent.active {
        frames += 1;
        assert!(frames < 100, "pursuit did not terminate");
        if let Some(s) = step(&mut intent, pos, false, dt, &cfg) {
            // Each walk-speed frame covers 0.5m toward +X.
            assert!((s.delta.length() - 0.5).abs() < 1e-4);
            assert!(s.delta.x > 0.0);
            pos += s.delta;
            let d = (intent.target - pos).length();
            assert!(d < last, "distance must strictly decrease");
            last = d;
        }
    }
    assert!((intent.target - pos).length() <= cfg.stop_distance + 1e-4);
    // Arrived: stays inactive absent a new click.
    assert!(step(&mut intent, pos, false, dt, &cfg).is_none());
}

#[test]
fn run_modifier_selects_run_speed() {
    let cfg = ClickMoveCfg::default();
    let mut intent = MoveIntent {
        target: Vec3::new(10.0, 0.0, 0.0),
        active: true,
    };
    let s = step(&mut intent, Vec3::ZERO, true, 0.1, &cfg).expect("step");
    assert!((s.delta.length() - 0.8).abs() < 1e-4);
}

#[test]
fn step_faces_movement_direction() {
    let cfg = ClickMoveCfg::default();
    let mut intent = MoveIntent {
        target: Vec3::new(10.0, 0.0, 0.0),
        active: true,
    };
    let s = step(&mut intent, Vec3::ZERO, false, 0.1, &cfg).expect("step");
    let facing = s.face * Vec3::Z;
    assert!((facing - Vec3::X).length() < 1e-4);
}

#[test]
fn vertical_offset_to_target_is_ignored() {
    let cfg = ClickMoveCfg::default();
    let mut intent = MoveIntent {
        // Directly overhead: planar distance is zero.
        target: Vec3::new(0.0, 5.0, 0.0),
        active: true,
    };
    assert!(step(&mut intent, Vec3::ZERO, false, 0.1, &cfg).is_none());
    assert!(!intent.active);
}

#[test]
fn click_on_ground_arms_intent() {
    let world = FlatWorld::new(0.0);
    let pose = CameraPose {
        eye: Vec3::new(0.0, 10.0, 0.0),
        rotation: Quat::from_euler(EulerRot::YXZ, 0.0, 90f32.to_radians(), 0.0),
    };
    let cfg = ClickMoveCfg::default();
    let mut intent = MoveIntent::default();
    let marker = begin_from_click(
        &world,
        &pose,
        &Projection::default(),
        Vec2::new(0.5, 0.5),
        &cfg,
        &mut intent,
    )
    .expect("ground hit");
    assert!(intent.active);
    assert!((marker - intent.target).length() < 1e-6);
    assert!(marker.y.abs() < 1e-3);
}

#[test]
fn click_miss_leaves_intent_untouched() {
    let world = FlatWorld::new(0.0);
    let pose = CameraPose {
        eye: Vec3::new(0.0, 10.0, 0.0),
        rotation: Quat::from_euler(EulerRot::YXZ, 0.0, 90f32.to_radians(), 0.0),
    };
    let cfg = ClickMoveCfg {
        // Ground is not in this mask; the click ray finds nothing.
        ground_mask: LayerMask::STATIC,
        ..Default::default()
    };
    let mut intent = MoveIntent::default();
    assert!(
        begin_from_click(
            &world,
            &pose,
            &Projection::default(),
            Vec2::new(0.5, 0.5),
            &cfg,
            &mut intent,
        )
        .is_none()
    );
    assert!(!intent.active);
}
