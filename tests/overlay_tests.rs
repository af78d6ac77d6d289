// Overlay layer tables, particle population and nav highlighting.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::overlay::*;
use crate::core::trigger::TriggerEdge::{self, *};
use crate::core::trigger::{
    Edges, ElementBounds, ScrollMark, TriggerSpan, TriggerSpec, TriggerState, TriggerUpdate,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn lazy_layer_populates_only_on_first_show() {
    let mut layer = OverlayLayer::lazy();
    let first = layer.apply(LayerAction::Show);
    assert!(first.populate);
    assert_eq!(first.opacity, Some(1.0));
    assert_eq!(layer.apply(LayerAction::Hide).opacity, Some(0.0));
    let again = layer.apply(LayerAction::Show);
    assert!(!again.populate);
    assert_eq!(again.opacity, Some(1.0));
}

#[test]
fn prepopulated_layer_is_not_refilled() {
    let mut layer = OverlayLayer::lazy();
    layer.mark_populated();
    assert!(!layer.apply(LayerAction::Show).populate);
}

#[test]
fn fixed_layer_never_populates() {
    let mut layer = OverlayLayer::fixed();
    let change = layer.apply(LayerAction::Show);
    assert!(!change.populate);
    assert_eq!(change.opacity, Some(1.0));
}

#[test]
fn whale_follows_section_then_footer() {
    let mut whale = OverlayLayer::fixed();
    assert_eq!(whale.on_edge(&WHALE_SECTION_ACTIONS, Enter).opacity, Some(1.0));
    // leaving the section keeps the whale up
    assert_eq!(whale.on_edge(&WHALE_SECTION_ACTIONS, Leave).opacity, None);
    assert_eq!(whale.on_edge(&WHALE_FOOTER_ACTIONS, Enter).opacity, Some(0.0));
    assert_eq!(whale.on_edge(&WHALE_FOOTER_ACTIONS, LeaveBack).opacity, Some(1.0));
    assert_eq!(whale.on_edge(&WHALE_SECTION_ACTIONS, LeaveBack).opacity, Some(0.0));
}

#[test]
fn particles_show_only_inside_their_span() {
    let mut bubbles = OverlayLayer::lazy();
    let edges = [Enter, Leave, EnterBack, LeaveBack];
    let expected = [1.0, 0.0, 1.0, 0.0];
    for (edge, opacity) in edges.into_iter().zip(expected) {
        let change = bubbles.on_edge(&PARTICLE_ACTIONS, edge);
        assert_eq!(change.opacity, Some(opacity), "after {:?}", edge);
    }
}

#[test]
fn render_gate_pauses_past_second_section() {
    assert_eq!(RENDER_GATE_ACTIONS.action(Enter), Some(false));
    assert_eq!(RENDER_GATE_ACTIONS.action(LeaveBack), Some(true));
    assert_eq!(RENDER_GATE_ACTIONS.action(Leave), None);
    assert_eq!(RENDER_GATE_ACTIONS.action(EnterBack), None);
}

#[test]
fn content_reveal_plays_and_reverses() {
    assert_eq!(CONTENT_REVEAL_ACTIONS.action(Enter), Some(true));
    assert_eq!(CONTENT_REVEAL_ACTIONS.action(LeaveBack), Some(false));
    assert_eq!(CONTENT_REVEAL_ACTIONS.action(Leave), None);
}

/// Four stacked 1000px anchors in a 1000px viewport, each observed from
/// "top 55%" to "bottom 55%", dispatched in page order.
struct NavPage {
    spans: Vec<TriggerSpan>,
    states: Vec<TriggerState>,
    nav: NavHighlighter,
}

impl NavPage {
    fn new() -> Self {
        let spec = TriggerSpec::new(ScrollMark::top(0.55), ScrollMark::bottom(0.55));
        let spans = (0..NAV_ANCHORS.len())
            .map(|i| {
                let top = i as f64 * 1000.0;
                spec.resolve(
                    ElementBounds {
                        top,
                        bottom: top + 1000.0,
                    },
                    1000.0,
                )
            })
            .collect::<Vec<_>>();
        Self {
            states: vec![TriggerState::new(); spans.len()],
            spans,
            nav: NavHighlighter::new(NAV_ANCHORS),
        }
    }

    fn scroll_to(&mut self, y: f64) -> Option<&str> {
        for (i, (span, state)) in self.spans.iter().zip(&mut self.states).enumerate() {
            let update = state.update(span, y);
            self.nav.on_update(i, &update);
        }
        self.nav.active_anchor()
    }
}

#[test]
fn nav_tracks_scroll_down() {
    let mut page = NavPage::new();
    assert_eq!(page.nav.active_anchor(), None);
    assert_eq!(page.scroll_to(0.0), Some("#hero"));
    assert_eq!(page.scroll_to(1000.0), Some("#section-1"));
    assert_eq!(page.scroll_to(2000.0), Some("#section-2"));
    assert_eq!(page.scroll_to(3200.0), Some("#section-3"));
}

#[test]
fn nav_tracks_scroll_back_up() {
    let mut page = NavPage::new();
    page.scroll_to(3200.0);
    assert_eq!(page.scroll_to(2000.0), Some("#section-2"));
    assert_eq!(page.scroll_to(1000.0), Some("#section-1"));
    assert_eq!(page.scroll_to(0.0), Some("#hero"));
}

#[test]
fn nav_jumps_ignore_skipped_anchors() {
    let mut page = NavPage::new();
    page.scroll_to(0.0);
    assert_eq!(page.scroll_to(3200.0), Some("#section-3"));
    // back to the top in one step, as a click on the hero link does
    assert_eq!(page.scroll_to(0.0), Some("#hero"));
    // and a partial jump lands on the anchor actually in view
    assert_eq!(page.scroll_to(2100.0), Some("#section-2"));
    assert_eq!(page.scroll_to(800.0), Some("#section-1"));
}

#[test]
fn nav_ignores_repeats_and_unknown_indices() {
    let mut nav = NavHighlighter::new(NAV_ANCHORS);
    let mut edges = Edges::new();
    edges.push(Enter);
    let entered = TriggerUpdate {
        edges,
        progress: None,
        active: true,
    };
    assert_eq!(nav.on_update(1, &entered), Some(1));
    assert_eq!(nav.on_update(1, &entered), None);
    assert_eq!(nav.on_update(9, &entered), None);
    let skipped = TriggerUpdate {
        active: false,
        ..entered.clone()
    };
    assert_eq!(nav.on_update(2, &skipped), None);
    assert_eq!(nav.active_anchor(), Some("#section-1"));
}

#[test]
fn bubble_styles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let b = BubbleStyle::random(&mut rng);
        assert!((0.0..=100.0).contains(&b.left_pct));
        assert!((0.0..=6.0).contains(&b.delay_sec));
        assert!((6.0..=16.0).contains(&b.duration_sec));
        assert!((0.55..=2.45).contains(&b.scale));
        assert!((0.18..=0.56).contains(&b.opacity));
    }
}

#[test]
fn fish_styles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let f = FishStyle::random(&mut rng);
        assert!((10.0..=90.0).contains(&f.top_pct));
        assert!((0.0..=8.0).contains(&f.delay_sec));
        assert!((10.0..=24.0).contains(&f.duration_sec));
        assert!((0.6..=2.0).contains(&f.scale));
        assert!((2.0..=8.0).contains(&f.blur_px));
    }
}

#[test]
fn style_pairs_carry_units() {
    let b = BubbleStyle {
        left_pct: 25.0,
        delay_sec: 1.5,
        duration_sec: 8.0,
        scale: 1.0,
        opacity: 0.3,
    };
    let pairs = b.style_pairs();
    assert_eq!(pairs[0], ("left", "25%".to_string()));
    assert_eq!(pairs[1], ("animation-delay", "1.5s".to_string()));
    assert_eq!(pairs[3], ("--s", "1".to_string()));

    let f = FishStyle {
        top_pct: 40.0,
        delay_sec: 0.0,
        duration_sec: 12.0,
        scale: 0.75,
        blur_px: 3.0,
    };
    assert_eq!(f.style_pairs()[4], ("--blur", "3px".to_string()));
}

#[test]
fn edge_with_no_action_changes_nothing() {
    let mut layer = OverlayLayer::fixed();
    let change = layer.on_edge(&WHALE_FOOTER_ACTIONS, TriggerEdge::Leave);
    assert_eq!(change, LayerChange::default());
}
