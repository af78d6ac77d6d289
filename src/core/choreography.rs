use crate::constants::{PARALLAX_SHIFT_PERCENT, TITLE_HOLD, TITLE_IN, TITLE_OUT};

// Scrubbed DOM choreography around the hero: title hold-and-sink, scroll
// indicator fade, section parallax.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitlePose {
    pub opacity: f32,
    pub y_px: f32,
    pub scale: f32,
    pub blur_px: f32,
}

impl TitlePose {
    const HIDDEN_BELOW: TitlePose = TitlePose {
        opacity: 0.0,
        y_px: 140.0,
        scale: 0.985,
        blur_px: 10.0,
    };
    const SETTLED: TitlePose = TitlePose {
        opacity: 1.0,
        y_px: 0.0,
        scale: 1.0,
        blur_px: 0.0,
    };
    const HELD: TitlePose = TitlePose {
        opacity: 1.0,
        y_px: 10.0,
        scale: 1.0,
        blur_px: 0.0,
    };
    const SUNK: TitlePose = TitlePose {
        opacity: 0.0,
        y_px: 240.0,
        scale: 0.985,
        blur_px: 10.0,
    };

    fn lerp(a: TitlePose, b: TitlePose, t: f32) -> TitlePose {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: f32, y: f32| x + (y - x) * t;
        TitlePose {
            opacity: mix(a.opacity, b.opacity),
            y_px: mix(a.y_px, b.y_px),
            scale: mix(a.scale, b.scale),
            blur_px: mix(a.blur_px, b.blur_px),
        }
    }

    pub fn transform(&self) -> String {
        format!("translateY({}px) scale({})", self.y_px, self.scale)
    }

    pub fn filter(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

/// Hero title pose for raw hero progress: fade in, hold while drifting
/// slightly, then sink out over the last stretch.
pub fn hero_title_pose(progress: f32) -> TitlePose {
    let total = TITLE_IN + TITLE_HOLD + TITLE_OUT;
    let t = progress.clamp(0.0, 1.0) * total;
    if t < TITLE_IN {
        TitlePose::lerp(TitlePose::HIDDEN_BELOW, TitlePose::SETTLED, t / TITLE_IN)
    } else if t < TITLE_IN + TITLE_HOLD {
        TitlePose::lerp(TitlePose::SETTLED, TitlePose::HELD, (t - TITLE_IN) / TITLE_HOLD)
    } else {
        TitlePose::lerp(
            TitlePose::HELD,
            TitlePose::SUNK,
            (t - TITLE_IN - TITLE_HOLD) / TITLE_OUT,
        )
    }
}

#[inline]
pub fn scroll_indicator_opacity(progress: f32) -> f32 {
    1.0 - progress.clamp(0.0, 1.0)
}

/// Vertical background offset (percent) for a section's parallax layer.
#[inline]
pub fn parallax_offset_pct(progress: f32, reduced: bool) -> f32 {
    if reduced {
        0.0
    } else {
        PARALLAX_SHIFT_PERCENT * progress.clamp(0.0, 1.0)
    }
}
