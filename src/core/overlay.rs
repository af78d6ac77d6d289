use crate::core::trigger::{EdgeActions, TriggerEdge, TriggerUpdate};
use rand::Rng;
use smallvec::SmallVec;

// DOM overlay state: layer visibility tables, one-time particle population
// and the active navigation link.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerAction {
    Show,
    Hide,
}

/// Whale silhouette while the first content section is in play.
pub const WHALE_SECTION_ACTIONS: EdgeActions<LayerAction> = EdgeActions {
    enter: Some(LayerAction::Show),
    leave: None,
    enter_back: Some(LayerAction::Show),
    leave_back: Some(LayerAction::Hide),
};

/// Whale fades out near the footer so it does not compete with the CTA.
pub const WHALE_FOOTER_ACTIONS: EdgeActions<LayerAction> = EdgeActions {
    enter: Some(LayerAction::Hide),
    leave: None,
    enter_back: None,
    leave_back: Some(LayerAction::Show),
};

/// Section bubbles and footer fish: visible only while their span is active.
pub const PARTICLE_ACTIONS: EdgeActions<LayerAction> = EdgeActions {
    enter: Some(LayerAction::Show),
    leave: Some(LayerAction::Hide),
    enter_back: Some(LayerAction::Show),
    leave_back: Some(LayerAction::Hide),
};

/// Render gate driven by `#section-2`: `false` pauses the scene.
pub const RENDER_GATE_ACTIONS: EdgeActions<bool> = EdgeActions {
    enter: Some(false),
    leave: None,
    enter_back: None,
    leave_back: Some(true),
};

/// Content reveal: play on enter, reverse on leave-back.
pub const CONTENT_REVEAL_ACTIONS: EdgeActions<bool> = EdgeActions {
    enter: Some(true),
    leave: None,
    enter_back: None,
    leave_back: Some(false),
};

/// DOM work a layer needs after an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerChange {
    /// Fill the layer with its particles before showing it (first show only).
    pub populate: bool,
    pub opacity: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayLayer {
    populate_on_show: bool,
    populated: bool,
}

impl OverlayLayer {
    /// A layer whose content already exists in the page.
    pub fn fixed() -> Self {
        Self {
            populate_on_show: false,
            populated: true,
        }
    }

    /// A layer lazily filled with generated particles on first show.
    pub fn lazy() -> Self {
        Self {
            populate_on_show: true,
            populated: false,
        }
    }

    /// Record that the layer already has children (never re-populate).
    pub fn mark_populated(&mut self) {
        self.populated = true;
    }

    pub fn apply(&mut self, action: LayerAction) -> LayerChange {
        match action {
            LayerAction::Show => {
                let populate = self.populate_on_show && !self.populated;
                self.populated = true;
                LayerChange {
                    populate,
                    opacity: Some(1.0),
                }
            }
            LayerAction::Hide => LayerChange {
                populate: false,
                opacity: Some(0.0),
            },
        }
    }

    pub fn on_edge(&mut self, actions: &EdgeActions<LayerAction>, edge: TriggerEdge) -> LayerChange {
        match actions.action(edge) {
            Some(a) => self.apply(a),
            None => LayerChange::default(),
        }
    }
}

/// Nav anchors observed for the active-link highlight, in page order.
pub const NAV_ANCHORS: [&str; 4] = ["#hero", "#section-1", "#section-2", "#section-3"];

/// Tracks which navigation link is active. An anchor whose span the scroll
/// position lands in takes the highlight; spans jumped over are ignored and
/// leaving never clears it, so after any scroll pass exactly one link stays
/// active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavHighlighter {
    anchors: SmallVec<[String; 4]>,
    active: Option<usize>,
}

impl NavHighlighter {
    pub fn new<I, S>(anchors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: anchors.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn active_anchor(&self) -> Option<&str> {
        self.active.map(|i| self.anchors[i].as_str())
    }

    /// Feed the trigger update for anchor `index`; returns the new active
    /// index if it changed.
    pub fn on_update(&mut self, index: usize, update: &TriggerUpdate) -> Option<usize> {
        if index >= self.anchors.len() || !update.active {
            return None;
        }
        let entered = matches!(
            update.edges.last(),
            Some(TriggerEdge::Enter | TriggerEdge::EnterBack)
        );
        if !entered || self.active == Some(index) {
            return None;
        }
        self.active = Some(index);
        Some(index)
    }
}

/// Randomised style for one section bubble.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BubbleStyle {
    pub left_pct: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl BubbleStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen::<f32>() * 100.0,
            delay_sec: rng.gen::<f32>() * 6.0,
            duration_sec: 6.0 + rng.gen::<f32>() * 10.0,
            scale: 0.55 + rng.gen::<f32>() * 1.9,
            opacity: 0.18 + rng.gen::<f32>() * 0.38,
        }
    }

    pub fn style_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("left", format!("{}%", self.left_pct)),
            ("animation-delay", format!("{}s", self.delay_sec)),
            ("animation-duration", format!("{}s", self.duration_sec)),
            ("--s", format!("{}", self.scale)),
            ("opacity", format!("{}", self.opacity)),
        ]
    }
}

/// Randomised style for one fish silhouette.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FishStyle {
    pub top_pct: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub scale: f32,
    pub blur_px: f32,
}

impl FishStyle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top_pct: 10.0 + rng.gen::<f32>() * 80.0,
            delay_sec: rng.gen::<f32>() * 8.0,
            duration_sec: 10.0 + rng.gen::<f32>() * 14.0,
            scale: 0.6 + rng.gen::<f32>() * 1.4,
            blur_px: 2.0 + rng.gen::<f32>() * 6.0,
        }
    }

    pub fn style_pairs(&self) -> [(&'static str, String); 5] {
        [
            ("top", format!("{}%", self.top_pct)),
            ("animation-delay", format!("{}s", self.delay_sec)),
            ("animation-duration", format!("{}s", self.duration_sec)),
            ("--scale", format!("{}", self.scale)),
            ("--blur", format!("{}px", self.blur_px)),
        ]
    }
}
