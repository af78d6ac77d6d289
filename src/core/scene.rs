use crate::constants::*;
use crate::core::constants::{WATER_DEEP_HEX, WATER_SURFACE_HEX};
use crate::core::motion::MotionPreference;
use crate::core::tier::DeviceTier;
use glam::Vec3;

/// Visual parameters derived from scroll progress. Recomputed on every
/// progress update and pushed into the renderer's parameter slots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParameters {
    /// Effective travel `p'` (progress scaled by the motion preference).
    pub travel: f32,
    pub camera_position: Vec3,
    pub look_at: Vec3,
    pub fog_density: f32,
    pub exposure: f32,
    pub water_blend: f32,
    pub water_color: Vec3,
    pub distortion_scale: f32,
    pub water_size: f32,
    pub moon_visible: bool,
    pub moon_glow_opacity: f32,
    pub moon_disk_opacity: f32,
    pub clouds_visible: bool,
}

impl Default for SceneParameters {
    fn default() -> Self {
        map_parameters(0.0, false, DeviceTier::DESKTOP, 0.0)
    }
}

/// Map clamped smoothed progress to scene parameters.
///
/// `pointer_x` is the horizontal pointer position in `[-1, 1]`; it only sways
/// the camera when motion is not reduced. Pure: identical inputs give
/// identical outputs.
pub fn map_parameters(
    progress: f32,
    reduced: bool,
    tier: DeviceTier,
    pointer_x: f32,
) -> SceneParameters {
    let p = progress.clamp(0.0, 1.0) * MotionPreference::new(reduced).travel();
    let p01 = p.clamp(0.0, 1.0);

    let camera_x = if reduced {
        0.0
    } else {
        pointer_x.clamp(-1.0, 1.0) * CAMERA_POINTER_SWAY
    };
    let camera_position = Vec3::new(
        camera_x,
        (CAMERA_START_Y - p * CAMERA_TRAVEL_Y).max(CAMERA_MIN_Y),
        CAMERA_START_Z - p * CAMERA_TRAVEL_Z,
    );
    let look_at = Vec3::new(0.0, 0.0, -p * LOOK_AT_TRAVEL_Z);

    let water_blend = water_blend_factor(p01);
    let surface = srgb_hex_to_linear(WATER_SURFACE_HEX);
    let deep = srgb_hex_to_linear(WATER_DEEP_HEX);

    let base_distortion = if reduced {
        WATER_DISTORTION_REDUCED
    } else {
        tier.water_distortion_base()
    };

    SceneParameters {
        travel: p,
        camera_position,
        look_at,
        fog_density: FOG_DENSITY_BASE + p * FOG_DENSITY_SPAN,
        exposure: EXPOSURE_BASE - p * EXPOSURE_SPAN,
        water_blend,
        water_color: surface.lerp(deep, water_blend),
        distortion_scale: base_distortion + p01 * WATER_DISTORTION_SPAN,
        water_size: tier.water_size_base() + p01 * WATER_SIZE_SPAN,
        moon_visible: p < MOON_HIDE_AT,
        moon_glow_opacity: MOON_GLOW_OPACITY * (1.0 - p * MOON_GLOW_FADE),
        moon_disk_opacity: MOON_DISK_OPACITY * (1.0 - p * MOON_DISK_FADE),
        clouds_visible: p < CLOUDS_HIDE_AT,
    }
}

/// Surface→deep blend factor with a dead zone over the first 18% of travel.
#[inline]
pub fn water_blend_factor(p01: f32) -> f32 {
    ((p01 - WATER_DEAD_ZONE) / (1.0 - WATER_DEAD_ZONE)).clamp(0.0, 1.0)
}

/// Convert a `0xRRGGBB` sRGB colour to linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Underwater colour-grade overlay. Driven by the raw (unsmoothed) progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorGrade {
    pub grade: f32,
}

impl ColorGrade {
    pub fn from_raw_progress(raw: f32) -> Self {
        Self {
            grade: ((raw - GRADE_START) / GRADE_SPAN).clamp(0.0, 1.0),
        }
    }

    pub fn bubble_opacity(self) -> f32 {
        self.grade * GRADE_BUBBLE_OPACITY
    }

    /// CSS custom properties written onto the document root.
    pub fn css_vars(self) -> [(&'static str, String); 3] {
        [
            ("--uw-blur", format!("{}px", self.grade * GRADE_BLUR_PX)),
            ("--uw-tint", format!("{}", self.grade)),
            ("--uw-shift", format!("{}px", self.grade * GRADE_SHIFT_PX)),
        ]
    }
}

/// Dive progress readout next to the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiveIndicator {
    pub percent: u32,
}

impl DiveIndicator {
    pub fn from_raw_progress(raw: f32) -> Self {
        Self {
            percent: (raw.clamp(0.0, 1.0) * 100.0).round() as u32,
        }
    }

    pub fn fill_height(self) -> String {
        format!("{}%", self.percent)
    }

    pub fn label(self) -> String {
        format!("Dive {}%", self.percent)
    }
}
