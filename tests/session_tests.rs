// Session state: render gating, the one-shot environment capture, clouds
// and camera-facing quads.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::capture::*;
use crate::core::clouds::*;
use crate::core::constants::CLOUD_RING_RADIUS;
use crate::core::motion::MotionPreference;
use crate::core::session::*;
use crate::core::tier::DeviceTier;
use glam::{Vec2, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn session(reduced: bool, rng: &mut StdRng) -> Session {
    let tier = DeviceTier::DESKTOP;
    let clouds = CloudField::generate(tier.cloud_count(), rng);
    Session::new(MotionPreference::new(reduced), tier, clouds)
}

#[test]
fn environment_is_captured_exactly_once() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut s = session(false, &mut rng);
    assert!(s.capture_state().is_pending());

    let tick = s.begin_tick(0.0, &mut rng).unwrap();
    let during = tick.capture.expect("first tick captures");
    assert!(!during.water && !during.mist);
    assert!(during.moon && during.clouds);
    assert!(!s.frame_visibility().water);

    s.finish_capture();
    assert!(s.capture_state().is_captured());
    assert!(s.frame_visibility().water && s.frame_visibility().mist);

    for i in 1..10 {
        let tick = s.begin_tick(i as f32 * 0.016, &mut rng).unwrap();
        assert_eq!(tick.capture, None);
    }
}

#[test]
fn capture_state_machine_never_rewinds() {
    let mut vis = SceneVisibility::default();
    let mut cap = EnvCapture::default();
    assert!(cap.begin(&mut vis));
    assert!(!cap.begin(&mut vis), "already capturing");
    cap.finish(&mut vis);
    assert_eq!(vis, SceneVisibility::default());
    assert!(!cap.begin(&mut vis));
    assert_eq!(vis, SceneVisibility::default());
    // finishing again is a no-op
    cap.finish(&mut vis);
    assert!(cap.is_captured());
}

#[test]
fn paused_session_does_no_work() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut s = session(false, &mut rng);
    s.set_render_enabled(false);
    let before = s.clouds().clone();
    assert!(s.begin_tick(1.0, &mut rng).is_none());
    assert_eq!(s.clouds(), &before);
    assert!(s.capture_state().is_pending());

    s.set_render_enabled(true);
    assert!(s.begin_tick(1.0, &mut rng).is_some());
}

#[test]
fn water_time_follows_motion_rate() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut full = session(false, &mut rng);
    let mut reduced = session(true, &mut rng);
    let a = full.begin_tick(10.0, &mut rng).unwrap().water_time;
    let b = reduced.begin_tick(10.0, &mut rng).unwrap().water_time;
    assert!((a - 3.0).abs() < 1e-5);
    assert!((b - 2.2).abs() < 1e-5);
}

#[test]
fn deep_scroll_hides_moon_and_clouds() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut s = session(false, &mut rng);
    for _ in 0..60 {
        s.on_scroll_progress(1.0);
    }
    let vis = s.frame_visibility();
    assert!(!vis.moon);
    assert!(!vis.clouds);
    assert!(vis.water);
}

#[test]
fn overlays_use_raw_progress_and_scene_uses_smoothed() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut s = session(false, &mut rng);
    let update = s.on_scroll_progress(1.0);
    assert_eq!(update.grade.grade, 1.0);
    assert_eq!(update.dive.percent, 100);
    assert!((update.params.travel - 0.18).abs() < 1e-6);
    assert!((s.progress().smoothed() - 0.18).abs() < 1e-6);
}

#[test]
fn pointer_and_motion_changes_remap_immediately() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut s = session(false, &mut rng);
    s.set_pointer(0.5, -0.2);
    assert!((s.params().camera_position.x - 0.5).abs() < 1e-6);
    s.set_reduced_motion(true);
    assert_eq!(s.params().camera_position.x, 0.0);
    assert!(s.motion().reduced);
}

#[test]
fn moon_quads_are_glow_then_disk() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = session(false, &mut rng);
    let [glow, disk] = s.moon_billboards();
    assert_eq!(glow.center, moon_center());
    assert!((glow.right.length() - 18.0).abs() < 1e-3);
    assert!((disk.up.length() - 10.0).abs() < 1e-3);
    assert!((glow.opacity - 0.1).abs() < 1e-6);
    assert!((disk.opacity - 0.75).abs() < 1e-6);
    assert!((moon_light_direction().length() - 1.0).abs() < 1e-6);
}

#[test]
fn clouds_start_on_the_ring() {
    let mut rng = StdRng::seed_from_u64(8);
    let field = CloudField::generate(26, &mut rng);
    assert_eq!(field.clouds().len(), 26);
    for c in field.clouds() {
        let r = Vec2::new(c.position.x, c.position.z).length();
        assert!(r >= CLOUD_RING_RADIUS * 0.55 - 1e-2 && r <= CLOUD_RING_RADIUS + 1e-2);
        assert!((120.0..=520.0).contains(&c.position.y));
        assert!((0.08..=0.22).contains(&c.opacity));
    }
}

#[test]
fn drifting_clouds_are_recycled_not_lost() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut field = CloudField::generate(14, &mut rng);
    let heights: Vec<f32> = field.clouds().iter().map(|c| c.position.y).collect();
    let mut respawned = 0;
    // large speed pushes clouds past the ring quickly
    for _ in 0..2000 {
        respawned += field.step(50.0, &mut rng);
        assert_eq!(field.clouds().len(), 14);
        for c in field.clouds() {
            let r = Vec2::new(c.position.x, c.position.z).length();
            assert!(r <= field.respawn_distance() + 1e-2);
        }
    }
    assert!(respawned > 0);
    let after: Vec<f32> = field.clouds().iter().map(|c| c.position.y).collect();
    assert_eq!(heights, after, "respawn keeps cloud height");
}

#[test]
fn billboards_face_the_camera() {
    let camera = Vec3::new(0.0, 6.0, 35.0);
    for center in [
        Vec3::new(1600.0, 300.0, 0.0),
        Vec3::new(-900.0, 150.0, -1200.0),
        Vec3::new(0.0, 0.0, 0.0),
    ] {
        for roll in [0.0, 1.0, 3.0] {
            let (right, up) = billboard_axes(center, camera, roll);
            assert!((right.length() - 1.0).abs() < 1e-4);
            assert!(right.dot(up).abs() < 1e-4);
            assert!(right.cross(up).dot(camera - center) > 0.0);
        }
    }
}

#[test]
fn cloud_quads_scale_with_cloud_size() {
    let mut rng = StdRng::seed_from_u64(10);
    let field = CloudField::generate(4, &mut rng);
    let quads = field.billboards(Vec3::ZERO);
    for (c, q) in field.clouds().iter().zip(&quads) {
        assert!((q.right.length() - 260.0 * c.scale).abs() < 1e-2);
        assert!((q.up.length() - 150.0 * c.scale).abs() < 1e-2);
    }
}

#[test]
fn cube_faces_look_down_their_axis() {
    for (face, (dir, _)) in CUBE_FACES.iter().enumerate() {
        let m = cube_face_view_proj(face, Vec3::ZERO, 1.0, 5000.0);
        let clip = m * (*dir * 10.0).extend(1.0);
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 1e-4);
        assert!((clip.y / clip.w).abs() < 1e-4);
        let depth = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&depth));

        let behind = m * (-*dir * 10.0).extend(1.0);
        assert!(behind.w < 0.0);
    }
}

#[test]
fn cube_projection_is_mirrored_horizontally() {
    // +X face, up +Y: +Z is to the camera's right in a right-handed view,
    // and lands on the left of the face after mirroring.
    let m = cube_face_view_proj(0, Vec3::ZERO, 1.0, 5000.0);
    let clip: Vec4 = m * Vec4::new(10.0, 0.0, 5.0, 1.0);
    assert!(clip.x / clip.w < 0.0);
}
