use smallvec::SmallVec;

// Scroll-threshold triggers: a span of document scroll offsets, a three-region
// state per span, and the edges emitted when the scroll position moves
// between regions.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementEdge {
    Top,
    Bottom,
}

/// One end of a trigger span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMark {
    /// The element edge meets this fraction of the viewport height
    /// (`0.0` = viewport top, `1.0` = viewport bottom).
    Edge { element: ElementEdge, viewport: f64 },
    /// A distance past the resolved start, in viewport heights.
    AfterStart(f64),
}

impl ScrollMark {
    pub const fn top(viewport: f64) -> Self {
        ScrollMark::Edge {
            element: ElementEdge::Top,
            viewport,
        }
    }

    pub const fn bottom(viewport: f64) -> Self {
        ScrollMark::Edge {
            element: ElementEdge::Bottom,
            viewport,
        }
    }
}

/// Element extent in document coordinates (CSS pixels from the page top).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start: ScrollMark,
    pub end: ScrollMark,
}

impl TriggerSpec {
    pub const fn new(start: ScrollMark, end: ScrollMark) -> Self {
        Self { start, end }
    }

    /// Resolve to scroll offsets for the current layout.
    pub fn resolve(&self, bounds: ElementBounds, viewport_h: f64) -> TriggerSpan {
        let mark = |m: ScrollMark, start: f64| match m {
            ScrollMark::Edge { element, viewport } => {
                let edge = match element {
                    ElementEdge::Top => bounds.top,
                    ElementEdge::Bottom => bounds.bottom,
                };
                edge - viewport * viewport_h
            }
            ScrollMark::AfterStart(viewports) => start + viewports * viewport_h,
        };
        // A relative start has nothing to be relative to; treat it as the element top.
        let start = mark(self.start, bounds.top);
        let end = mark(self.end, start).max(start);
        TriggerSpan { start, end }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpan {
    pub start: f64,
    pub end: f64,
}

impl TriggerSpan {
    pub fn region(&self, scroll: f64) -> Region {
        if scroll < self.start {
            Region::Before
        } else if scroll > self.end {
            Region::After
        } else {
            Region::Active
        }
    }

    pub fn progress(&self, scroll: f64) -> f32 {
        let len = self.end - self.start;
        if len <= f64::EPSILON {
            return if scroll >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll - self.start) / len).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Before,
    Active,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEdge {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

pub type Edges = SmallVec<[TriggerEdge; 2]>;

/// Edges crossed moving from one region to another, in crossing order.
pub fn edges_between(from: Region, to: Region) -> Edges {
    use Region::*;
    use TriggerEdge::*;
    let mut out = Edges::new();
    match (from, to) {
        (Before, Active) => out.push(Enter),
        (Before, After) => {
            out.push(Enter);
            out.push(Leave);
        }
        (Active, After) => out.push(Leave),
        (After, Active) => out.push(EnterBack),
        (After, Before) => {
            out.push(EnterBack);
            out.push(LeaveBack);
        }
        (Active, Before) => out.push(LeaveBack),
        _ => {}
    }
    out
}

/// Result of feeding one scroll position to a trigger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerUpdate {
    pub edges: Edges,
    /// New scrubbed progress, present only when it changed.
    pub progress: Option<f32>,
    /// Whether the scroll position sits inside the span after this update.
    /// A span jumped over entirely reports edges but stays inactive.
    pub active: bool,
}

/// Per-trigger state: current region and last reported progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TriggerState {
    region: Region,
    progress: Option<f32>,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn is_active(&self) -> bool {
        self.region == Region::Active
    }

    pub fn update(&mut self, span: &TriggerSpan, scroll: f64) -> TriggerUpdate {
        let region = span.region(scroll);
        let edges = edges_between(self.region, region);
        self.region = region;

        let p = span.progress(scroll);
        let progress = match self.progress {
            Some(prev) if prev == p => None,
            _ => Some(p),
        };
        self.progress = Some(p);
        TriggerUpdate {
            edges,
            progress,
            active: self.is_active(),
        }
    }
}

/// What a layer does on each edge; `None` means the edge is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeActions<T: Copy> {
    pub enter: Option<T>,
    pub leave: Option<T>,
    pub enter_back: Option<T>,
    pub leave_back: Option<T>,
}

impl<T: Copy> EdgeActions<T> {
    pub fn action(&self, edge: TriggerEdge) -> Option<T> {
        match edge {
            TriggerEdge::Enter => self.enter,
            TriggerEdge::Leave => self.leave,
            TriggerEdge::EnterBack => self.enter_back,
            TriggerEdge::LeaveBack => self.leave_back,
        }
    }
}
