use crate::constants::{
    CLOUD_DRIFT_SPEED, CLOUD_DRIFT_SPEED_REDUCED, SMOOTHING_ALPHA, SMOOTHING_ALPHA_REDUCED,
    TRAVEL_FULL, TRAVEL_REDUCED, WATER_TIME_RATE, WATER_TIME_RATE_REDUCED,
};

/// Reduced-motion preference. Seeded from the OS media query and flipped by
/// the on-page toggle; every mapping reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    pub reduced: bool,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn toggle(&mut self) {
        self.reduced = !self.reduced;
    }

    pub fn travel(self) -> f32 {
        if self.reduced {
            TRAVEL_REDUCED
        } else {
            TRAVEL_FULL
        }
    }

    pub fn smoothing_alpha(self) -> f32 {
        if self.reduced {
            SMOOTHING_ALPHA_REDUCED
        } else {
            SMOOTHING_ALPHA
        }
    }

    pub fn water_time_rate(self) -> f32 {
        if self.reduced {
            WATER_TIME_RATE_REDUCED
        } else {
            WATER_TIME_RATE
        }
    }

    pub fn cloud_drift_speed(self) -> f32 {
        if self.reduced {
            CLOUD_DRIFT_SPEED_REDUCED
        } else {
            CLOUD_DRIFT_SPEED
        }
    }

    /// Text for the motion toggle button.
    pub fn toggle_label(self) -> &'static str {
        if self.reduced {
            "Motion: reduced"
        } else {
            "Reduce motion"
        }
    }

    /// Value for `<html data-motion>`.
    pub fn dataset_value(self) -> &'static str {
        if self.reduced {
            "reduced"
        } else {
            "full"
        }
    }

    pub fn aria_pressed(self) -> &'static str {
        if self.reduced {
            "true"
        } else {
            "false"
        }
    }
}
