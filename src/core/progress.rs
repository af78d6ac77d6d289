use crate::constants::{
    SNAP_DURATION_MAX_SEC, SNAP_DURATION_MIN_SEC, SNAP_IDLE_DELAY_SEC, SNAP_SECONDS_PER_UNIT,
};

/// Scroll progress with an exponentially smoothed companion.
///
/// `target` is the raw scrubbed progress (always in `[0, 1]`); `smoothed` chases
/// it by a fixed fraction per update. `smoothed` is deliberately left
/// unclamped, so readers go through [`ProgressSource::clamped`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressSource {
    target: f32,
    smoothed: f32,
}

impl ProgressSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new raw progress value and advance the smoothed value one step.
    pub fn update(&mut self, target: f32, alpha: f32) -> f32 {
        self.target = if target.is_finite() {
            target.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.smoothed += (self.target - self.smoothed) * alpha;
        self.smoothed
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn smoothed(&self) -> f32 {
        self.smoothed
    }

    #[inline]
    pub fn clamped(&self) -> f32 {
        self.smoothed.clamp(0.0, 1.0)
    }
}

/// Where and how fast a resting scroll should settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPlan {
    pub to_progress: f32,
    pub duration_sec: f32,
}

/// Decide whether the hero trigger should snap after `idle_sec` without scrolling.
///
/// Snaps go to the nearer end of `[0, 1]`; progress already at an end, a short
/// idle, or reduced motion all yield `None`.
pub fn plan_snap(progress: f32, idle_sec: f32, reduced: bool) -> Option<SnapPlan> {
    if reduced || idle_sec < SNAP_IDLE_DELAY_SEC {
        return None;
    }
    if !(progress > 0.0 && progress < 1.0) {
        return None;
    }
    let to_progress = if progress < 0.5 { 0.0 } else { 1.0 };
    let distance = (to_progress - progress).abs();
    let duration_sec =
        (distance * SNAP_SECONDS_PER_UNIT).clamp(SNAP_DURATION_MIN_SEC, SNAP_DURATION_MAX_SEC);
    Some(SnapPlan {
        to_progress,
        duration_sec,
    })
}

/// An in-flight snap, expressed in document scroll offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTween {
    from: f64,
    to: f64,
    duration_sec: f32,
    elapsed_sec: f32,
    last_written: f64,
}

impl SnapTween {
    pub fn new(from: f64, to: f64, duration_sec: f32) -> Self {
        Self {
            from,
            to,
            duration_sec: duration_sec.max(1e-3),
            elapsed_sec: 0.0,
            last_written: from,
        }
    }

    /// Advance by `dt_sec`; returns the scroll offset to apply and whether the tween is done.
    pub fn step(&mut self, dt_sec: f32) -> (f64, bool) {
        self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)).min(self.duration_sec);
        let t = self.elapsed_sec / self.duration_sec;
        let eased = ease_out_cubic(t) as f64;
        self.last_written = self.from + (self.to - self.from) * eased;
        (self.last_written, self.elapsed_sec >= self.duration_sec)
    }

    /// True when an observed scroll offset was not produced by this tween.
    pub fn interrupted_by(&self, observed: f64, tolerance: f64) -> bool {
        (observed - self.last_written).abs() > tolerance
    }

    pub fn target(&self) -> f64 {
        self.to
    }
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
