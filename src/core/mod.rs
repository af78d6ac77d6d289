pub mod capture;
pub mod choreography;
pub mod clouds;
pub mod constants;
pub mod cursor;
pub mod motion;
pub mod overlay;
pub mod prefs;
pub mod progress;
pub mod scene;
pub mod session;
pub mod sky;
pub mod tier;
pub mod trigger;

// Shaders bundled as string constants. `FRAME_WGSL` is prepended to every
// scene shader so they share one frame-uniform layout.
pub static FRAME_WGSL: &str = include_str!("../../shaders/frame.wgsl");
pub static SKY_WGSL: &str = include_str!("../../shaders/sky.wgsl");
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static BILLBOARD_WGSL: &str = include_str!("../../shaders/billboard.wgsl");
pub static WATER_WGSL: &str = include_str!("../../shaders/water.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
