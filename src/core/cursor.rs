use crate::constants::{CURSOR_DOT_FOLLOW, CURSOR_RING_FOLLOW, RIPPLE_MIN_INTERVAL_MS};
use glam::Vec2;

/// Neon cursor: a dot that tracks the pointer tightly and a ring that lags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFollower {
    pub target: Vec2,
    pub dot: Vec2,
    pub ring: Vec2,
}

impl CursorFollower {
    pub fn centered(viewport_w: f32, viewport_h: f32) -> Self {
        let c = Vec2::new(viewport_w * 0.5, viewport_h * 0.5);
        Self {
            target: c,
            dot: c,
            ring: c,
        }
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// One animation frame of follow.
    pub fn step(&mut self) {
        self.dot += (self.target - self.dot) * CURSOR_DOT_FOLLOW;
        self.ring += (self.target - self.ring) * CURSOR_RING_FOLLOW;
    }
}

/// Client pixels to normalized device coordinates (`[-1, 1]`, y up).
pub fn pointer_ndc(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Vec2 {
    let w = viewport_w.max(1.0);
    let h = viewport_h.max(1.0);
    Vec2::new(client_x / w * 2.0 - 1.0, -(client_y / h) * 2.0 + 1.0)
}

/// Limits pointer-move ripples to one per interval. Clicks bypass it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RippleGate {
    last_ms: Option<f64>,
}

impl RippleGate {
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last <= RIPPLE_MIN_INTERVAL_MS => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Address for the copy-email button: the CTA link without its `mailto:`
/// scheme, or a placeholder when the link is missing or empty.
pub fn email_from_href(href: Option<&str>) -> String {
    let addr = href.unwrap_or("").replacen("mailto:", "", 1);
    if addr.is_empty() {
        "hello@example.com".to_string()
    } else {
        addr
    }
}
