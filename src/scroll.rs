use crate::constants::{SNAP_CANCEL_TOLERANCE_PX, SNAP_IDLE_DELAY_SEC};
use crate::core::progress::{plan_snap, SnapTween};
use crate::core::session::Session;
use crate::core::trigger::{TriggerSpan, TriggerSpec, TriggerState, TriggerUpdate};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type TriggerHandler = Box<dyn FnMut(&TriggerUpdate)>;
pub type SharedTriggers = Rc<RefCell<ScrollTriggers>>;

struct Trigger {
    target: web::Element,
    spec: TriggerSpec,
    span: TriggerSpan,
    state: TriggerState,
    handler: TriggerHandler,
}

/// Every scroll trigger on the page. Spans are resolved on [`refresh`]
/// and handlers run from [`update`] whenever edges fire or progress moves.
///
/// Handlers must not touch the registry itself.
///
/// [`refresh`]: ScrollTriggers::refresh
/// [`update`]: ScrollTriggers::update
#[derive(Default)]
pub struct ScrollTriggers {
    triggers: Vec<Trigger>,
}

impl ScrollTriggers {
    pub fn add(
        &mut self,
        target: web::Element,
        spec: TriggerSpec,
        handler: impl FnMut(&TriggerUpdate) + 'static,
    ) -> usize {
        self.triggers.push(Trigger {
            target,
            spec,
            span: TriggerSpan { start: 0.0, end: 0.0 },
            state: TriggerState::new(),
            handler: Box::new(handler),
        });
        self.triggers.len() - 1
    }

    pub fn span(&self, id: usize) -> Option<TriggerSpan> {
        self.triggers.get(id).map(|t| t.span)
    }

    /// Re-resolve every span against the current layout, then dispatch.
    pub fn refresh(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let (_, vh) = dom::viewport(&window);
        let scroll = dom::scroll_y();
        for t in &mut self.triggers {
            t.span = t.spec.resolve(dom::element_bounds(&t.target, scroll), vh);
        }
        log::debug!("refreshed {} scroll triggers", self.triggers.len());
        self.update_at(scroll);
    }

    pub fn update(&mut self) {
        self.update_at(dom::scroll_y());
    }

    fn update_at(&mut self, scroll: f64) {
        for t in &mut self.triggers {
            let update = t.state.update(&t.span, scroll);
            if !update.edges.is_empty() || update.progress.is_some() {
                (t.handler)(&update);
            }
        }
    }
}

/// Settles the hero trigger at 0 or 1 once scrolling rests.
#[derive(Default)]
pub struct SnapDriver {
    trigger: Option<usize>,
    last_scroll_ms: f64,
    last_step_ms: Option<f64>,
    armed: bool,
    tween: Option<SnapTween>,
}

impl SnapDriver {
    pub fn attach(&mut self, trigger: usize) {
        self.trigger = Some(trigger);
    }

    /// Scroll offsets written by the running tween are expected; anything
    /// else is the user taking over and cancels it.
    pub fn on_scroll(&mut self, now_ms: f64, scroll_y: f64) {
        if let Some(tween) = &self.tween {
            if !tween.interrupted_by(scroll_y, SNAP_CANCEL_TOLERANCE_PX) {
                return;
            }
            self.tween = None;
            log::debug!("snap cancelled by user scroll");
        }
        self.last_scroll_ms = now_ms;
        self.armed = true;
    }

    /// One animation frame; returns the scroll offset to write, if any.
    pub fn step(&mut self, now_ms: f64, triggers: &ScrollTriggers, reduced: bool) -> Option<f64> {
        let dt_sec = self
            .last_step_ms
            .map(|last| ((now_ms - last) / 1000.0) as f32)
            .unwrap_or(0.0);
        self.last_step_ms = Some(now_ms);

        if let Some(tween) = self.tween.as_mut() {
            let (y, done) = tween.step(dt_sec);
            if done {
                self.tween = None;
            }
            return Some(y);
        }
        if !self.armed {
            return None;
        }
        let idle_sec = ((now_ms - self.last_scroll_ms) / 1000.0) as f32;
        if idle_sec < SNAP_IDLE_DELAY_SEC {
            return None;
        }
        self.armed = false;

        let span = triggers.span(self.trigger?)?;
        let scroll = dom::scroll_y();
        let plan = plan_snap(span.progress(scroll), idle_sec, reduced)?;
        let to = span.start + (span.end - span.start) * plan.to_progress as f64;
        log::debug!("snap to {} over {:.2}s", plan.to_progress, plan.duration_sec);
        self.tween = Some(SnapTween::new(scroll, to, plan.duration_sec));
        None
    }
}

pub fn wire_scroll_events(
    window: &web::Window,
    triggers: &SharedTriggers,
    snap: &Rc<RefCell<SnapDriver>>,
) {
    let triggers = triggers.clone();
    let snap = snap.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        snap.borrow_mut().on_scroll(instant::now(), dom::scroll_y());
        triggers.borrow_mut().update();
    });
}

/// Drive the snap tween from its own animation-frame loop.
pub fn start_snap_loop(
    triggers: SharedTriggers,
    snap: Rc<RefCell<SnapDriver>>,
    session: Rc<RefCell<Session>>,
) {
    frame::start_loop(move || {
        let reduced = session.borrow().motion().reduced;
        let target = snap
            .borrow_mut()
            .step(instant::now(), &triggers.borrow(), reduced);
        if let (Some(y), Some(w)) = (target, web::window()) {
            w.scroll_to_with_x_and_y(w.scroll_x().unwrap_or(0.0), y);
        }
    });
}
