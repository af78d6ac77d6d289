use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Which scene layers get drawn. The environment capture temporarily clears
/// `water` and `mist` so they do not reflect themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneVisibility {
    pub water: bool,
    pub mist: bool,
    pub moon: bool,
    pub clouds: bool,
}

impl Default for SceneVisibility {
    fn default() -> Self {
        Self {
            water: true,
            mist: true,
            moon: true,
            clouds: true,
        }
    }
}

/// One-shot environment reflection capture.
///
/// `NotCaptured → Capturing → Captured`; the hide/render/restore sequence
/// is the `Capturing` state, and nothing moves the machine backwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvCapture {
    #[default]
    NotCaptured,
    Capturing {
        restore: SceneVisibility,
    },
    Captured,
}

impl EnvCapture {
    pub fn is_pending(&self) -> bool {
        matches!(self, EnvCapture::NotCaptured)
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, EnvCapture::Captured)
    }

    /// Start the capture: hide water and mist. Returns `false` (and changes
    /// nothing) unless no capture has happened yet.
    pub fn begin(&mut self, visibility: &mut SceneVisibility) -> bool {
        if !self.is_pending() {
            return false;
        }
        *self = EnvCapture::Capturing {
            restore: *visibility,
        };
        visibility.water = false;
        visibility.mist = false;
        true
    }

    /// Finish the capture and restore what `begin` hid.
    pub fn finish(&mut self, visibility: &mut SceneVisibility) {
        if let EnvCapture::Capturing { restore } = *self {
            visibility.water = restore.water;
            visibility.mist = restore.mist;
            *self = EnvCapture::Captured;
            log::info!("environment captured");
        }
    }
}

/// Look direction and up vector per cube face, in +X, -X, +Y, -Y, +Z, -Z order.
pub const CUBE_FACES: [(Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y),
    (Vec3::NEG_X, Vec3::Y),
    (Vec3::Y, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::Z),
    (Vec3::Z, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y),
];

/// View-projection for rendering one cube face from `eye`.
///
/// The projection is mirrored in x so a right-handed look-at lands texels
/// where cube sampling (top-left texture origin) expects them.
pub fn cube_face_view_proj(face: usize, eye: Vec3, near: f32, far: f32) -> Mat4 {
    let (dir, up) = CUBE_FACES[face % 6];
    let proj =
        Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0)) * Mat4::perspective_rh(FRAC_PI_2, 1.0, near, far);
    proj * Mat4::look_at_rh(eye, eye + dir, up)
}
