/// Scroll choreography and per-frame tuning constants.
///
/// These constants express intended behavior (travel distances, smoothing
/// factors, thresholds) and keep magic numbers out of the mapping code.
// Progress smoothing (applied once per scrubbed progress update)
pub const SMOOTHING_ALPHA: f32 = 0.18;
pub const SMOOTHING_ALPHA_REDUCED: f32 = 0.35; // faster settle when motion is reduced

// Snapping at rest
pub const SNAP_IDLE_DELAY_SEC: f32 = 0.05;
pub const SNAP_DURATION_MIN_SEC: f32 = 0.12;
pub const SNAP_DURATION_MAX_SEC: f32 = 0.28;
pub const SNAP_SECONDS_PER_UNIT: f32 = 0.56; // a half-progress snap takes the max duration
pub const SNAP_CANCEL_TOLERANCE_PX: f64 = 2.0;

// Travel
pub const TRAVEL_FULL: f32 = 1.0;
pub const TRAVEL_REDUCED: f32 = 0.45;
pub const HERO_SCROLL_VIEWPORTS: f64 = 1.10; // hero trigger spans 110% of the viewport height

// Camera path
pub const CAMERA_START_Z: f32 = 35.0;
pub const CAMERA_TRAVEL_Z: f32 = 62.0;
pub const CAMERA_START_Y: f32 = 6.0;
pub const CAMERA_TRAVEL_Y: f32 = 18.0;
pub const CAMERA_MIN_Y: f32 = -10.0;
pub const CAMERA_POINTER_SWAY: f32 = 1.0;
pub const LOOK_AT_TRAVEL_Z: f32 = 45.0;
pub const CAMERA_FOV_DEG: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 6000.0;

// Atmosphere
pub const FOG_DENSITY_BASE: f32 = 0.0011;
pub const FOG_DENSITY_SPAN: f32 = 0.0033;
pub const EXPOSURE_BASE: f32 = 0.88;
pub const EXPOSURE_SPAN: f32 = 0.08;

// Water
pub const WATER_DEAD_ZONE: f32 = 0.18; // no deep-colour shift before this much travel
pub const WATER_DISTORTION_REDUCED: f32 = 0.55;
pub const WATER_DISTORTION_SPAN: f32 = 0.18;
pub const WATER_SIZE_SPAN: f32 = 0.12;
pub const WATER_TIME_RATE: f32 = 0.3;
pub const WATER_TIME_RATE_REDUCED: f32 = 0.22;

// Moon and clouds
pub const MOON_HIDE_AT: f32 = 0.94;
pub const MOON_GLOW_OPACITY: f32 = 0.1;
pub const MOON_GLOW_FADE: f32 = 0.55;
pub const MOON_DISK_OPACITY: f32 = 0.75;
pub const MOON_DISK_FADE: f32 = 0.7;
pub const CLOUDS_HIDE_AT: f32 = 0.9;
pub const CLOUD_DRIFT_SPEED: f32 = 0.05;
pub const CLOUD_DRIFT_SPEED_REDUCED: f32 = 0.02;
pub const CLOUD_SPIN_STEP: f32 = 0.002;
pub const CLOUD_RESPAWN_FACTOR: f32 = 1.15; // recycle beyond this multiple of the ring radius

// Colour grade overlay (driven by raw progress)
pub const GRADE_START: f32 = 0.28;
pub const GRADE_SPAN: f32 = 0.55;
pub const GRADE_BUBBLE_OPACITY: f32 = 0.65;
pub const GRADE_BLUR_PX: f32 = 4.0;
pub const GRADE_SHIFT_PX: f32 = 0.9;

// Hero title timeline (relative durations)
pub const TITLE_IN: f32 = 0.18;
pub const TITLE_HOLD: f32 = 0.78;
pub const TITLE_OUT: f32 = 1.0 - TITLE_HOLD;
pub const SCROLL_INDICATOR_VIEWPORTS: f64 = 0.18;
pub const PARALLAX_SHIFT_PERCENT: f32 = -18.0;
pub const CONTENT_REVEAL_SEC: f32 = 0.9;

// Neon cursor
pub const CURSOR_DOT_FOLLOW: f32 = 0.55;
pub const CURSOR_RING_FOLLOW: f32 = 0.22;
pub const RIPPLE_MIN_INTERVAL_MS: f64 = 260.0;

// Copy-email feedback
pub const COPY_CONFIRM_MS: i32 = 1200;
pub const COPY_FALLBACK_MS: i32 = 2000;
