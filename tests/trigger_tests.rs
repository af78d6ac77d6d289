// Scroll-trigger spans, regions and edge reporting.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::trigger::*;

fn edges(from: Region, to: Region) -> Vec<TriggerEdge> {
    edges_between(from, to).into_vec()
}

#[test]
fn edges_for_every_region_pair() {
    use Region::*;
    use TriggerEdge::*;
    assert_eq!(edges(Before, Before), vec![]);
    assert_eq!(edges(Before, Active), vec![Enter]);
    assert_eq!(edges(Before, After), vec![Enter, Leave]);
    assert_eq!(edges(Active, Active), vec![]);
    assert_eq!(edges(Active, After), vec![Leave]);
    assert_eq!(edges(Active, Before), vec![LeaveBack]);
    assert_eq!(edges(After, After), vec![]);
    assert_eq!(edges(After, Active), vec![EnterBack]);
    assert_eq!(edges(After, Before), vec![EnterBack, LeaveBack]);
}

#[test]
fn edge_marks_resolve_against_viewport() {
    let bounds = ElementBounds {
        top: 1000.0,
        bottom: 1800.0,
    };
    let spec = TriggerSpec::new(ScrollMark::top(0.9), ScrollMark::bottom(0.0));
    let span = spec.resolve(bounds, 800.0);
    assert_eq!(span.start, 1000.0 - 720.0);
    assert_eq!(span.end, 1800.0);
}

#[test]
fn after_start_is_relative_to_resolved_start() {
    let bounds = ElementBounds {
        top: 0.0,
        bottom: 900.0,
    };
    let spec = TriggerSpec::new(ScrollMark::top(0.0), ScrollMark::AfterStart(1.10));
    let span = spec.resolve(bounds, 1000.0);
    assert_eq!(span.start, 0.0);
    assert!((span.end - 1100.0).abs() < 1e-9);
}

#[test]
fn end_never_precedes_start() {
    let bounds = ElementBounds {
        top: 500.0,
        bottom: 520.0,
    };
    let spec = TriggerSpec::new(ScrollMark::top(0.0), ScrollMark::bottom(1.0));
    let span = spec.resolve(bounds, 800.0);
    assert_eq!(span.start, 500.0);
    assert_eq!(span.end, 500.0);
}

#[test]
fn span_progress_and_regions() {
    let span = TriggerSpan {
        start: 100.0,
        end: 300.0,
    };
    assert_eq!(span.region(50.0), Region::Before);
    assert_eq!(span.region(100.0), Region::Active);
    assert_eq!(span.region(300.0), Region::Active);
    assert_eq!(span.region(301.0), Region::After);
    assert_eq!(span.progress(0.0), 0.0);
    assert_eq!(span.progress(200.0), 0.5);
    assert_eq!(span.progress(900.0), 1.0);
}

#[test]
fn zero_length_span_progress_is_a_step() {
    let span = TriggerSpan {
        start: 400.0,
        end: 400.0,
    };
    assert_eq!(span.progress(399.0), 0.0);
    assert_eq!(span.progress(400.0), 1.0);
    assert_eq!(span.progress(1000.0), 1.0);
}

#[test]
fn state_walks_through_a_scroll_down_and_back() {
    use TriggerEdge::*;
    let span = TriggerSpan {
        start: 100.0,
        end: 200.0,
    };
    let mut state = TriggerState::new();
    assert_eq!(state.region(), Region::Before);

    let u = state.update(&span, 0.0);
    assert!(u.edges.is_empty());
    assert_eq!(u.progress, Some(0.0), "first update always reports");

    let u = state.update(&span, 150.0);
    assert_eq!(u.edges.as_slice(), &[Enter]);
    assert_eq!(u.progress, Some(0.5));
    assert!(state.is_active());

    let u = state.update(&span, 250.0);
    assert_eq!(u.edges.as_slice(), &[Leave]);
    assert_eq!(u.progress, Some(1.0));

    let u = state.update(&span, 180.0);
    assert_eq!(u.edges.as_slice(), &[EnterBack]);

    let u = state.update(&span, 10.0);
    assert_eq!(u.edges.as_slice(), &[LeaveBack]);
    assert_eq!(u.progress, Some(0.0));
    assert_eq!(state.region(), Region::Before);
}

#[test]
fn jumping_over_a_span_reports_both_edges() {
    use TriggerEdge::*;
    let span = TriggerSpan {
        start: 100.0,
        end: 200.0,
    };
    let mut state = TriggerState::new();
    state.update(&span, 0.0);
    let u = state.update(&span, 5000.0);
    assert_eq!(u.edges.as_slice(), &[Enter, Leave]);
    let u = state.update(&span, 0.0);
    assert_eq!(u.edges.as_slice(), &[EnterBack, LeaveBack]);
}

#[test]
fn unchanged_progress_is_not_reported() {
    let span = TriggerSpan {
        start: 100.0,
        end: 200.0,
    };
    let mut state = TriggerState::new();
    state.update(&span, 150.0);
    let u = state.update(&span, 150.0);
    assert!(u.edges.is_empty());
    assert_eq!(u.progress, None);
    // still clamped at 0 while before the span
    state.update(&span, 0.0);
    assert_eq!(state.update(&span, 20.0).progress, None);
}

#[test]
fn edge_actions_lookup() {
    let actions = EdgeActions {
        enter: Some(1u8),
        leave: None,
        enter_back: Some(3),
        leave_back: Some(4),
    };
    assert_eq!(actions.action(TriggerEdge::Enter), Some(1));
    assert_eq!(actions.action(TriggerEdge::Leave), None);
    assert_eq!(actions.action(TriggerEdge::EnterBack), Some(3));
    assert_eq!(actions.action(TriggerEdge::LeaveBack), Some(4));
}

#[test]
fn updates_report_whether_the_span_is_active() {
    let span = TriggerSpan {
        start: 100.0,
        end: 200.0,
    };
    let mut state = TriggerState::new();
    assert!(!state.update(&span, 0.0).active);
    assert!(state.update(&span, 150.0).active);
    // jumping clean over the span still fires edges but never activates it
    let mut skipped = TriggerState::new();
    skipped.update(&span, 0.0);
    let down = skipped.update(&span, 900.0);
    assert_eq!(down.edges.len(), 2);
    assert!(!down.active);
    let up = skipped.update(&span, 0.0);
    assert_eq!(up.edges.len(), 2);
    assert!(!up.active);
}
