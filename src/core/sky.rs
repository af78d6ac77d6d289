use crate::core::constants::{
    MILKY_WAY_HEX, MILKY_WAY_TILT, STAR_COOL_HEX, STAR_NEUTRAL_HEX, STAR_WARM_HEX,
};
use crate::core::scene::srgb_hex_to_linear;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Relative size classes: mostly small, a few bright, rare very bright.
pub const STAR_SIZES: [f32; 3] = [1.0, 1.8, 2.6];

// Milky Way points are attenuated against half the viewport height rather
// than the fixed 300px star reference; fold the ratio into their size.
const MILKY_WAY_SIZE_RATIO: f32 = 500.0 / 300.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarPoint {
    pub position: Vec3,
    pub color: Vec3,
    /// Size in pixels at the 300-unit reference distance.
    pub size: f32,
}

/// Stars scattered uniformly over a thin spherical shell.
pub fn generate_stars<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    base_size: f32,
    rng: &mut R,
) -> Vec<StarPoint> {
    let cool = srgb_hex_to_linear(STAR_COOL_HEX);
    let neutral = srgb_hex_to_linear(STAR_NEUTRAL_HEX);
    let warm = srgb_hex_to_linear(STAR_WARM_HEX);

    (0..count)
        .map(|_| {
            let theta = TAU * rng.gen::<f32>();
            let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let r = radius * (0.92 + 0.08 * rng.gen::<f32>());
            let position = Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.cos(),
                r * phi.sin() * theta.sin(),
            );

            let pick: f32 = rng.gen();
            let tint = if pick < 0.12 {
                warm
            } else if pick < 0.42 {
                cool
            } else {
                neutral
            };
            let brightness = 0.85 + 0.65 * rng.gen::<f32>();

            let s: f32 = rng.gen();
            let class = if s < 0.92 {
                STAR_SIZES[0]
            } else if s < 0.985 {
                STAR_SIZES[1]
            } else {
                STAR_SIZES[2]
            };

            StarPoint {
                position,
                color: tint * brightness,
                size: base_size * class,
            }
        })
        .collect()
}

/// A faint tilted band of points around the horizon ring.
pub fn generate_milky_way<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    point_size: f32,
    rng: &mut R,
) -> Vec<StarPoint> {
    let band = srgb_hex_to_linear(MILKY_WAY_HEX);
    let (tilt_s, tilt_c) = MILKY_WAY_TILT.sin_cos();

    (0..count)
        .map(|_| {
            let t = rng.gen::<f32>() * PI * 2.0;
            let band_width = 0.05 + (0.18 - 0.05) * rng.gen::<f32>();
            let y = (rng.gen::<f32>() - 0.5) * band_width;
            let x = t.cos();
            let z = t.sin();

            let yy = y * tilt_c + z * tilt_s;
            let zz = -y * tilt_s + z * tilt_c;
            let r = radius * (0.9 + 0.1 * rng.gen::<f32>());

            let b = 0.06 + (0.18 - 0.06) * rng.gen::<f32>();
            StarPoint {
                position: Vec3::new(x * r, yy * r, zz * r),
                color: band * b,
                size: point_size * MILKY_WAY_SIZE_RATIO,
            }
        })
        .collect()
}
