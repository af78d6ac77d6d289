use glam::Vec3;

// Scene palette and layout shared by the renderer and the pure scene logic.

// Palette (sRGB hex, converted to linear where used)
pub const WATER_SURFACE_HEX: u32 = 0x041b2a;
pub const WATER_DEEP_HEX: u32 = 0x01060b;
pub const FOG_HEX: u32 = 0x02040b;
pub const SKY_TOP_HEX: u32 = 0x01020a;
pub const SKY_BOTTOM_HEX: u32 = 0x040816;
pub const MOON_DISK_HEX: u32 = 0xeaf2ff;
pub const MOON_GLOW_HEX: u32 = 0x7aaeff;
pub const STAR_COOL_HEX: u32 = 0x9cc8ff;
pub const STAR_NEUTRAL_HEX: u32 = 0xffffff;
pub const STAR_WARM_HEX: u32 = 0xffe3b0;
pub const MILKY_WAY_HEX: u32 = 0x9fb4ff;

// Moon
pub const MOON_LIGHT_POSITION: Vec3 = Vec3::new(70.0, 95.0, -140.0);
pub const MOON_DISTANCE_SCALE: f32 = 12.0; // moon group sits along the light direction
pub const MOON_DISK_RADIUS: f32 = 10.0;
pub const MOON_GLOW_RADIUS: f32 = 18.0;

// Sky
pub const STAR_RADIUS: f32 = 2400.0;
pub const MILKY_WAY_RADIUS: f32 = 2350.0;
pub const MILKY_WAY_TILT: f32 = 0.55;

// Clouds
pub const CLOUD_RING_RADIUS: f32 = 1600.0;
pub const CLOUD_MIN_Y: f32 = 120.0;
pub const CLOUD_MAX_Y: f32 = 520.0;
pub const CLOUD_WIDTH: f32 = 520.0;
pub const CLOUD_HEIGHT: f32 = 300.0;

// Water and mist planes
pub const WATER_EXTENT: f32 = 6500.0;
pub const MIST_EXTENT: f32 = 9000.0;
pub const MIST_HEIGHT: f32 = 0.05;
pub const MIST_OPACITY: f32 = 0.08;

// Environment capture camera
pub const ENV_NEAR: f32 = 1.0;
pub const ENV_FAR: f32 = 5000.0;
