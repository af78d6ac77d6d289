use crate::constants::{CLOUD_RESPAWN_FACTOR, CLOUD_SPIN_STEP};
use crate::core::constants::{
    CLOUD_HEIGHT, CLOUD_MAX_Y, CLOUD_MIN_Y, CLOUD_RING_RADIUS, CLOUD_WIDTH,
};
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

/// A camera-facing quad: centre plus half-extent axes already scaled and rolled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub center: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub opacity: f32,
}

/// Unit axes for a quad at `center` facing `camera`, rolled by `roll` radians
/// in its own plane. `right × up` points at the camera.
pub fn billboard_axes(center: Vec3, camera: Vec3, roll: f32) -> (Vec3, Vec3) {
    let forward = (camera - center).try_normalize().unwrap_or(Vec3::Z);
    let right = Vec3::Y
        .cross(forward)
        .try_normalize()
        .unwrap_or(Vec3::X);
    let up = forward.cross(right);
    let (s, c) = roll.sin_cos();
    (right * c + up * s, up * c - right * s)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cloud {
    pub position: Vec3,
    pub roll: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Planar drift per step in (x, z).
    pub drift: Vec2,
    pub spin: f32,
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Bounded population of drifting cloud billboards on a ring around the origin.
/// Clouds that drift too far are recycled onto the ring, never destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct CloudField {
    clouds: Vec<Cloud>,
    radius: f32,
}

impl CloudField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let radius = CLOUD_RING_RADIUS;
        let clouds = (0..count)
            .map(|_| {
                let (x, z) = ring_point(radius, rng);
                Cloud {
                    position: Vec3::new(x, lerp(CLOUD_MIN_Y, CLOUD_MAX_Y, rng.gen()), z),
                    roll: rng.gen::<f32>() * TAU,
                    scale: lerp(0.6, 1.55, rng.gen()),
                    opacity: lerp(0.08, 0.22, rng.gen()),
                    drift: Vec2::new(lerp(-0.35, -0.05, rng.gen()), lerp(0.02, 0.22, rng.gen())),
                    spin: lerp(-0.06, 0.06, rng.gen()),
                }
            })
            .collect();
        Self { clouds, radius }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn respawn_distance(&self) -> f32 {
        self.radius * CLOUD_RESPAWN_FACTOR
    }

    /// Advance one frame; returns how many clouds were recycled.
    pub fn step<R: Rng + ?Sized>(&mut self, drift_speed: f32, rng: &mut R) -> usize {
        let limit = self.respawn_distance();
        let mut respawned = 0;
        for c in &mut self.clouds {
            c.roll += c.spin * CLOUD_SPIN_STEP;
            c.position.x += c.drift.x * drift_speed;
            c.position.z += c.drift.y * drift_speed;
            let len = Vec2::new(c.position.x, c.position.z).length();
            if len > limit {
                let (x, z) = ring_point(self.radius, rng);
                c.position.x = x;
                c.position.z = z;
                respawned += 1;
            }
        }
        respawned
    }

    /// Camera-facing quads for the current frame.
    pub fn billboards(&self, camera: Vec3) -> Vec<Billboard> {
        self.clouds
            .iter()
            .map(|c| {
                let (right, up) = billboard_axes(c.position, camera, c.roll);
                Billboard {
                    center: c.position,
                    right: right * (CLOUD_WIDTH * 0.5 * c.scale),
                    up: up * (CLOUD_HEIGHT * 0.5 * c.scale),
                    opacity: c.opacity,
                }
            })
            .collect()
    }
}

fn ring_point<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> (f32, f32) {
    let a = rng.gen::<f32>() * TAU;
    let r = radius * lerp(0.55, 1.0, rng.gen());
    (a.cos() * r, a.sin() * r)
}
