use crate::core::capture::{EnvCapture, SceneVisibility};
use crate::core::choreography::{hero_title_pose, TitlePose};
use crate::core::clouds::{billboard_axes, Billboard, CloudField};
use crate::core::constants::{
    MOON_DISK_RADIUS, MOON_DISTANCE_SCALE, MOON_GLOW_RADIUS, MOON_LIGHT_POSITION,
};
use crate::core::motion::MotionPreference;
use crate::core::progress::ProgressSource;
use crate::core::scene::{map_parameters, ColorGrade, DiveIndicator, SceneParameters};
use crate::core::tier::DeviceTier;
use glam::{Vec2, Vec3};
use rand::Rng;

/// Everything a hero progress update changes.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub params: SceneParameters,
    pub grade: ColorGrade,
    pub dive: DiveIndicator,
    pub title: TitlePose,
}

/// Work for one enabled render tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickPlan {
    pub water_time: f32,
    /// Set on the single tick that must render the environment capture,
    /// holding the visibility to capture with.
    pub capture: Option<SceneVisibility>,
}

/// Session state shared by scroll handlers and the render loop.
pub struct Session {
    motion: MotionPreference,
    tier: DeviceTier,
    progress: ProgressSource,
    pointer: Vec2,
    render_enabled: bool,
    capture: EnvCapture,
    visibility: SceneVisibility,
    params: SceneParameters,
    clouds: CloudField,
}

impl Session {
    pub fn new(motion: MotionPreference, tier: DeviceTier, clouds: CloudField) -> Self {
        Self {
            motion,
            tier,
            progress: ProgressSource::new(),
            pointer: Vec2::ZERO,
            render_enabled: true,
            capture: EnvCapture::NotCaptured,
            visibility: SceneVisibility::default(),
            params: map_parameters(0.0, motion.reduced, tier, 0.0),
            clouds,
        }
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn tier(&self) -> DeviceTier {
        self.tier
    }

    pub fn params(&self) -> &SceneParameters {
        &self.params
    }

    pub fn progress(&self) -> &ProgressSource {
        &self.progress
    }

    pub fn capture_state(&self) -> EnvCapture {
        self.capture
    }

    pub fn clouds(&self) -> &CloudField {
        &self.clouds
    }

    /// Smooth the raw hero progress one step and re-derive everything from it.
    /// The colour grade and dive readout use the raw value on purpose.
    pub fn on_scroll_progress(&mut self, raw: f32) -> ScrollUpdate {
        self.progress.update(raw, self.motion.smoothing_alpha());
        self.remap();
        let raw = self.progress.target();
        ScrollUpdate {
            params: self.params,
            grade: ColorGrade::from_raw_progress(raw),
            dive: DiveIndicator::from_raw_progress(raw),
            title: hero_title_pose(raw),
        }
    }

    /// Re-derive parameters from the current smoothed progress without stepping it.
    pub fn remap(&mut self) -> SceneParameters {
        self.params = map_parameters(
            self.progress.clamped(),
            self.motion.reduced,
            self.tier,
            self.pointer.x,
        );
        self.params
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.motion.reduced = reduced;
        self.remap();
    }

    /// Pointer in normalized device coordinates (`[-1, 1]`, y up).
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.remap();
    }

    pub fn render_enabled(&self) -> bool {
        self.render_enabled
    }

    pub fn set_render_enabled(&mut self, enabled: bool) {
        if self.render_enabled != enabled {
            log::debug!("render {}", if enabled { "resumed" } else { "paused" });
        }
        self.render_enabled = enabled;
    }

    /// Advance time-based animation for one frame. `None` when rendering is
    /// paused: the caller still reschedules but does no work.
    pub fn begin_tick<R: Rng + ?Sized>(&mut self, elapsed_sec: f32, rng: &mut R) -> Option<TickPlan> {
        if !self.render_enabled {
            return None;
        }
        let water_time = elapsed_sec * self.motion.water_time_rate();
        self.clouds.step(self.motion.cloud_drift_speed(), rng);
        let capture = if self.capture.begin(&mut self.visibility) {
            Some(self.frame_visibility())
        } else {
            None
        };
        Some(TickPlan {
            water_time,
            capture,
        })
    }

    /// Close a capture started by [`Session::begin_tick`].
    pub fn finish_capture(&mut self) {
        self.capture.finish(&mut self.visibility);
    }

    /// Layers to draw this frame: capture state plus progress-driven flags.
    pub fn frame_visibility(&self) -> SceneVisibility {
        SceneVisibility {
            moon: self.visibility.moon && self.params.moon_visible,
            clouds: self.visibility.clouds && self.params.clouds_visible,
            ..self.visibility
        }
    }

    pub fn cloud_billboards(&self) -> Vec<Billboard> {
        self.clouds.billboards(self.params.camera_position)
    }

    /// Moon glow then disk, facing the camera.
    pub fn moon_billboards(&self) -> [Billboard; 2] {
        let center = moon_center();
        let (right, up) = billboard_axes(center, self.params.camera_position, 0.0);
        [
            Billboard {
                center,
                right: right * MOON_GLOW_RADIUS,
                up: up * MOON_GLOW_RADIUS,
                opacity: self.params.moon_glow_opacity,
            },
            Billboard {
                center,
                right: right * MOON_DISK_RADIUS,
                up: up * MOON_DISK_RADIUS,
                opacity: self.params.moon_disk_opacity,
            },
        ]
    }
}

pub fn moon_center() -> Vec3 {
    MOON_LIGHT_POSITION * MOON_DISTANCE_SCALE
}

pub fn moon_light_direction() -> Vec3 {
    MOON_LIGHT_POSITION.normalize()
}
