pub mod buttons;
pub mod cursor;
pub mod motion;
pub mod pointer;

pub use buttons::{skip_intro_now, wire_copy_email, wire_skip_buttons};
pub use cursor::wire_neon_cursor;
pub use motion::{wire_motion_ui, REDUCED_MOTION_QUERY};
pub use pointer::{wire_camera_pointer, wire_cta_press, wire_resize};
