// Device tier: decided once at startup, immutable for the session.

/// Viewports whose shorter side is below this count as mobile-ish.
pub const SMALL_VIEWPORT_PX: f64 = 820.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceTier {
    pub mobileish: bool,
}

impl DeviceTier {
    pub const DESKTOP: DeviceTier = DeviceTier { mobileish: false };
    pub const MOBILE: DeviceTier = DeviceTier { mobileish: true };

    /// Classify from pointer type and viewport size (CSS pixels).
    pub fn detect(coarse_pointer: bool, viewport_w: f64, viewport_h: f64) -> Self {
        let small = viewport_w.min(viewport_h) < SMALL_VIEWPORT_PX;
        Self {
            mobileish: coarse_pointer || small,
        }
    }

    #[inline]
    fn pick<T>(self, mobile: T, desktop: T) -> T {
        if self.mobileish {
            mobile
        } else {
            desktop
        }
    }

    pub fn star_count(self) -> usize {
        self.pick(1400, 4800)
    }

    pub fn milky_way_count(self) -> usize {
        self.pick(700, 2200)
    }

    pub fn cloud_count(self) -> usize {
        self.pick(14, 26)
    }

    /// Edge length of each environment cube face.
    pub fn env_face_size(self) -> u32 {
        self.pick(128, 256)
    }

    pub fn pixel_ratio_cap(self) -> f64 {
        self.pick(1.25, 1.75)
    }

    pub fn bubble_count(self) -> usize {
        self.pick(18, 34)
    }

    pub fn fish_count(self) -> usize {
        self.pick(6, 10)
    }

    pub fn star_base_size(self) -> f32 {
        self.pick(1.6, 2.2)
    }

    pub fn milky_way_point_size(self) -> f32 {
        self.pick(1.0, 1.2)
    }

    pub fn water_distortion_base(self) -> f32 {
        self.pick(0.75, 0.95)
    }

    pub fn water_size_base(self) -> f32 {
        self.pick(1.25, 1.05)
    }

    pub fn effective_pixel_ratio(self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.min(self.pixel_ratio_cap())
    }
}
