// Host-side tests for the progress → scene parameter mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::constants::{WATER_DEEP_HEX, WATER_SURFACE_HEX};
use crate::core::scene::*;
use crate::core::tier::DeviceTier;

const EPS: f32 = 1e-4;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn hero_at_rest_matches_opening_shot() {
    let p = map_parameters(0.0, false, DeviceTier::DESKTOP, 0.0);
    assert!(approx(p.camera_position.x, 0.0));
    assert!(approx(p.camera_position.y, 6.0));
    assert!(approx(p.camera_position.z, 35.0));
    assert!(approx(p.look_at.z, 0.0));
    assert!(approx(p.fog_density, 0.0011));
    assert!(approx(p.exposure, 0.88));
    assert!(approx(p.water_blend, 0.0));
    assert!(approx(p.distortion_scale, 0.95));
    assert!(approx(p.water_size, 1.05));
    assert!(p.moon_visible);
    assert!(p.clouds_visible);
    assert!(approx(p.moon_glow_opacity, 0.1));
    assert!(approx(p.moon_disk_opacity, 0.75));
}

#[test]
fn full_dive_reaches_deep_water() {
    let p = map_parameters(1.0, false, DeviceTier::DESKTOP, 0.0);
    assert!(approx(p.camera_position.z, -27.0));
    // 6 - 18 = -12 is floored at -10
    assert!(approx(p.camera_position.y, -10.0));
    assert!(approx(p.look_at.z, -45.0));
    assert!(approx(p.fog_density, 0.0044));
    assert!(approx(p.exposure, 0.80));
    assert!(approx(p.water_blend, 1.0));
    let deep = srgb_hex_to_linear(WATER_DEEP_HEX);
    assert!((p.water_color - deep).length() < EPS);
    assert!(approx(p.distortion_scale, 1.13));
    assert!(approx(p.water_size, 1.17));
    assert!(!p.moon_visible);
    assert!(!p.clouds_visible);
    assert!(approx(p.moon_glow_opacity, 0.045));
    assert!(approx(p.moon_disk_opacity, 0.225));
}

#[test]
fn reduced_motion_shortens_travel() {
    let p = map_parameters(1.0, true, DeviceTier::DESKTOP, 0.8);
    assert!(approx(p.travel, 0.45));
    assert!(approx(p.camera_position.x, 0.0), "no pointer sway when reduced");
    assert!(approx(p.camera_position.z, 35.0 - 0.45 * 62.0));
    assert!(approx(p.camera_position.y, 6.0 - 0.45 * 18.0));
    assert!(approx(p.distortion_scale, 0.55 + 0.45 * 0.18));
    assert!(approx(p.water_blend, (0.45 - 0.18) / 0.82));
    assert!(p.moon_visible);
    assert!(p.clouds_visible);
}

#[test]
fn pointer_sways_camera_only_with_full_motion() {
    let p = map_parameters(0.3, false, DeviceTier::DESKTOP, -0.6);
    assert!(approx(p.camera_position.x, -0.6));
    // out-of-range pointer input is clamped
    let p = map_parameters(0.3, false, DeviceTier::DESKTOP, 4.0);
    assert!(approx(p.camera_position.x, 1.0));
}

#[test]
fn mobile_tier_changes_water_bases() {
    let p = map_parameters(0.0, false, DeviceTier::MOBILE, 0.0);
    assert!(approx(p.distortion_scale, 0.75));
    assert!(approx(p.water_size, 1.25));
}

#[test]
fn outputs_stay_in_range_for_any_progress() {
    for tier in [DeviceTier::DESKTOP, DeviceTier::MOBILE] {
        for reduced in [false, true] {
            for i in -10..=110 {
                let p = map_parameters(i as f32 / 100.0, reduced, tier, 0.0);
                assert!(p.camera_position.y >= -10.0 - EPS);
                assert!((0.0011 - EPS..=0.0044 + EPS).contains(&p.fog_density));
                assert!((0.80 - EPS..=0.88 + EPS).contains(&p.exposure));
                assert!((0.0..=1.0).contains(&p.water_blend));
                assert!(p.moon_glow_opacity >= 0.0 && p.moon_disk_opacity >= 0.0);
            }
        }
    }
}

#[test]
fn mapping_is_monotonic_in_progress() {
    let mut prev = map_parameters(0.0, false, DeviceTier::DESKTOP, 0.0);
    for i in 1..=100 {
        let p = map_parameters(i as f32 / 100.0, false, DeviceTier::DESKTOP, 0.0);
        assert!(p.camera_position.z < prev.camera_position.z);
        assert!(p.camera_position.y <= prev.camera_position.y);
        assert!(p.fog_density > prev.fog_density);
        assert!(p.exposure < prev.exposure);
        assert!(p.water_blend >= prev.water_blend);
        assert!(p.distortion_scale > prev.distortion_scale);
        prev = p;
    }
}

#[test]
fn mapping_is_idempotent() {
    let a = map_parameters(0.37, false, DeviceTier::MOBILE, 0.2);
    let b = map_parameters(0.37, false, DeviceTier::MOBILE, 0.2);
    assert_eq!(a, b);
}

#[test]
fn water_colour_holds_through_dead_zone() {
    let surface = srgb_hex_to_linear(WATER_SURFACE_HEX);
    for i in 0..=18 {
        let p = map_parameters(i as f32 / 100.0, false, DeviceTier::DESKTOP, 0.0);
        assert_eq!(p.water_blend, 0.0);
        assert!((p.water_color - surface).length() < EPS);
    }
    assert!(water_blend_factor(0.19) > 0.0);
    assert!(approx(water_blend_factor(0.59), 0.5));
}

#[test]
fn clouds_and_moon_hide_at_their_thresholds() {
    let d = DeviceTier::DESKTOP;
    assert!(map_parameters(0.899, false, d, 0.0).clouds_visible);
    assert!(!map_parameters(0.9, false, d, 0.0).clouds_visible);
    assert!(map_parameters(0.939, false, d, 0.0).moon_visible);
    assert!(!map_parameters(0.94, false, d, 0.0).moon_visible);
}

#[test]
fn hex_to_linear_endpoints() {
    assert_eq!(srgb_hex_to_linear(0x000000), glam::Vec3::ZERO);
    assert!((srgb_hex_to_linear(0xffffff) - glam::Vec3::ONE).length() < EPS);
    // mid grey is darker in linear space
    assert!(srgb_hex_to_linear(0x808080).x < 0.25);
}

#[test]
fn colour_grade_follows_raw_progress() {
    assert_eq!(ColorGrade::from_raw_progress(0.0).grade, 0.0);
    assert_eq!(ColorGrade::from_raw_progress(0.28).grade, 0.0);
    assert!(approx(ColorGrade::from_raw_progress(0.555).grade, 0.5));
    assert_eq!(ColorGrade::from_raw_progress(1.0).grade, 1.0);

    let g = ColorGrade { grade: 0.5 };
    assert!(approx(g.bubble_opacity(), 0.325));
    let vars = g.css_vars();
    assert_eq!(vars[0], ("--uw-blur", "2px".to_string()));
    assert_eq!(vars[1], ("--uw-tint", "0.5".to_string()));
    assert_eq!(vars[2], ("--uw-shift", "0.45px".to_string()));
}

#[test]
fn dive_indicator_rounds_to_percent() {
    let d = DiveIndicator::from_raw_progress(0.426);
    assert_eq!(d.percent, 43);
    assert_eq!(d.fill_height(), "43%");
    assert_eq!(d.label(), "Dive 43%");
    assert_eq!(DiveIndicator::from_raw_progress(1.0).label(), "Dive 100%");
}
