use crate::constants::{CONTENT_REVEAL_SEC, HERO_SCROLL_VIEWPORTS, SCROLL_INDICATOR_VIEWPORTS};
use crate::core::choreography::{parallax_offset_pct, scroll_indicator_opacity};
use crate::core::overlay::{
    BubbleStyle, FishStyle, LayerChange, NavHighlighter, OverlayLayer, CONTENT_REVEAL_ACTIONS,
    NAV_ANCHORS, PARTICLE_ACTIONS, RENDER_GATE_ACTIONS, WHALE_FOOTER_ACTIONS,
    WHALE_SECTION_ACTIONS,
};
use crate::core::session::{ScrollUpdate, Session};
use crate::core::trigger::{ScrollMark, TriggerSpec};
use crate::dom;
use crate::scroll::SharedTriggers;
use fnv::FnvHashMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const HERO: &str = "hero";
const SECTION_1: &str = "section-1";
const SECTION_2: &str = "section-2";

fn apply_change(el: &web::HtmlElement, change: LayerChange) {
    if let Some(opacity) = change.opacity {
        dom::set_opacity(el, opacity);
    }
}

fn populate<S, F>(document: &web::Document, layer: &web::HtmlElement, class: &str, styles: S)
where
    S: IntoIterator<Item = F>,
    F: IntoIterator<Item = (&'static str, String)>,
{
    for style in styles {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        el.set_class_name(class);
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            for (prop, value) in style {
                dom::set_style(html, prop, &value);
            }
        }
        _ = layer.append_child(&el);
    }
}

/// Whale silhouette: two triggers share one layer.
fn wire_whale(document: &web::Document, triggers: &SharedTriggers) {
    let Some(whale) = dom::html_by_id(document, "whale-layer") else {
        return;
    };
    dom::set_opacity(&whale, 0.0);
    let layer = Rc::new(RefCell::new(OverlayLayer::fixed()));
    let mut reg = triggers.borrow_mut();

    if let Some(section) = document.get_element_by_id(SECTION_1) {
        let (layer, whale) = (layer.clone(), whale.clone());
        reg.add(
            section,
            TriggerSpec::new(ScrollMark::top(0.90), ScrollMark::bottom(0.0)),
            move |u| {
                for &edge in &u.edges {
                    apply_change(&whale, layer.borrow_mut().on_edge(&WHALE_SECTION_ACTIONS, edge));
                }
            },
        );
    }
    if let Some(footer) = document.query_selector("footer").ok().flatten() {
        reg.add(
            footer,
            TriggerSpec::new(ScrollMark::top(0.75), ScrollMark::bottom(1.0)),
            move |u| {
                for &edge in &u.edges {
                    apply_change(&whale, layer.borrow_mut().on_edge(&WHALE_FOOTER_ACTIONS, edge));
                }
            },
        );
    }
}

/// A lazily populated particle layer tied to `#section-1`.
fn wire_particles(
    document: &web::Document,
    triggers: &SharedTriggers,
    layer_id: &str,
    spec: TriggerSpec,
    mut fill: impl FnMut(&web::Document, &web::HtmlElement) + 'static,
) {
    let (Some(el), Some(section)) = (
        dom::html_by_id(document, layer_id),
        document.get_element_by_id(SECTION_1),
    ) else {
        return;
    };
    let mut state = OverlayLayer::lazy();
    if el.child_element_count() > 0 {
        state.mark_populated();
    }
    let doc = document.clone();
    triggers.borrow_mut().add(section, spec, move |u| {
        for &edge in &u.edges {
            let change = state.on_edge(&PARTICLE_ACTIONS, edge);
            if change.populate {
                fill(&doc, &el);
            }
            apply_change(&el, change);
        }
    });
}

fn wire_nav(document: &web::Document, triggers: &SharedTriggers) {
    let links = dom::query_all(document, ".midnav__link");
    if links.is_empty() {
        return;
    }
    let by_href: FnvHashMap<String, web::Element> = links
        .iter()
        .filter_map(|l| l.get_attribute("href").map(|h| (h, l.clone())))
        .collect();
    let nav = Rc::new(RefCell::new(NavHighlighter::new(NAV_ANCHORS)));
    let links = Rc::new(links);
    let by_href = Rc::new(by_href);

    let mut reg = triggers.borrow_mut();
    for (index, anchor) in NAV_ANCHORS.iter().enumerate() {
        let Some(target) = document.query_selector(anchor).ok().flatten() else {
            continue;
        };
        let (nav, links, by_href) = (nav.clone(), links.clone(), by_href.clone());
        reg.add(
            target,
            TriggerSpec::new(ScrollMark::top(0.55), ScrollMark::bottom(0.55)),
            move |u| {
                let mut nav = nav.borrow_mut();
                if nav.on_update(index, u).is_none() {
                    return;
                }
                for l in links.iter() {
                    _ = l.class_list().remove_1("is-active");
                }
                if let Some(active) = nav.active_anchor().and_then(|a| by_href.get(a)) {
                    _ = active.class_list().add_1("is-active");
                }
            },
        );
    }
}

fn wire_content_sections(
    document: &web::Document,
    triggers: &SharedTriggers,
    session: &Rc<RefCell<Session>>,
) {
    let mut reg = triggers.borrow_mut();
    for section in dom::query_all(document, ".content-section") {
        if let Some(content) = dom::child_html(&section, ".content") {
            reg.add(
                section.clone(),
                TriggerSpec::new(ScrollMark::top(0.72), ScrollMark::top(0.30)),
                move |u| {
                    for &edge in &u.edges {
                        match CONTENT_REVEAL_ACTIONS.action(edge) {
                            Some(true) => {
                                dom::set_style(
                                    &content,
                                    "transition",
                                    &format!(
                                        "opacity {s}s cubic-bezier(0.22, 1, 0.36, 1), transform {s}s cubic-bezier(0.22, 1, 0.36, 1)",
                                        s = CONTENT_REVEAL_SEC
                                    ),
                                );
                                dom::set_opacity(&content, 1.0);
                                dom::set_style(&content, "transform", "translateY(0px)");
                            }
                            // Back to the stylesheet's hidden state.
                            Some(false) => {
                                _ = content.style().remove_property("opacity");
                                _ = content.style().remove_property("transform");
                            }
                            None => {}
                        }
                    }
                },
            );
        }
        if let Some(bg) = dom::child_html(&section, ".parallax-bg") {
            let session = session.clone();
            reg.add(
                section.clone(),
                TriggerSpec::new(ScrollMark::top(1.0), ScrollMark::bottom(0.0)),
                move |u| {
                    if let Some(p) = u.progress {
                        let pct = parallax_offset_pct(p, session.borrow().motion().reduced);
                        dom::set_style(&bg, "transform", &format!("translateY({}%)", pct));
                    }
                },
            );
        }
    }
}

/// Overlays that work without the 3D scene.
pub fn wire_page_layers(
    document: &web::Document,
    triggers: &SharedTriggers,
    session: &Rc<RefCell<Session>>,
    rng: &mut StdRng,
) {
    wire_whale(document, triggers);

    let tier = session.borrow().tier();
    let (bubble_count, fish_count) = (tier.bubble_count(), tier.fish_count());
    let mut bubble_rng = StdRng::seed_from_u64(rng.gen());
    wire_particles(
        document,
        triggers,
        "section-bubbles",
        TriggerSpec::new(ScrollMark::top(0.85), ScrollMark::bottom(0.0)),
        move |doc, layer| {
            let styles: Vec<_> = (0..bubble_count)
                .map(|_| BubbleStyle::random(&mut bubble_rng).style_pairs())
                .collect();
            populate(doc, layer, "sbubble", styles);
        },
    );
    let mut fish_rng = StdRng::seed_from_u64(rng.gen());
    wire_particles(
        document,
        triggers,
        "fish-layer",
        TriggerSpec::new(ScrollMark::top(0.80), ScrollMark::bottom(1.0)),
        move |doc, layer| {
            let styles: Vec<_> = (0..fish_count)
                .map(|_| FishStyle::random(&mut fish_rng).style_pairs())
                .collect();
            populate(doc, layer, "fish", styles);
        },
    );

    wire_nav(document, triggers);
    wire_content_sections(document, triggers, session);
}

struct HeroElements {
    dive_fill: Option<web::HtmlElement>,
    dive_label: Option<web::HtmlElement>,
    title: Option<web::HtmlElement>,
    color_grade: Option<web::HtmlElement>,
    bubble_layer: Option<web::HtmlElement>,
}

impl HeroElements {
    fn find(document: &web::Document) -> Self {
        Self {
            dive_fill: dom::html_by_id(document, "dive-progress"),
            dive_label: dom::html_by_id(document, "dive-label"),
            title: dom::html_by_id(document, "hero-title"),
            color_grade: dom::html_by_id(document, "color-grade"),
            bubble_layer: dom::html_by_id(document, "bubble-layer"),
        }
    }

    fn apply(&self, document: &web::Document, update: &ScrollUpdate) {
        if let Some(el) = &self.dive_fill {
            dom::set_style(el, "height", &update.dive.fill_height());
        }
        if let Some(el) = &self.dive_label {
            el.set_text_content(Some(&update.dive.label()));
        }
        if let Some(el) = &self.color_grade {
            dom::set_opacity(el, update.grade.grade);
        }
        if let Some(el) = &self.bubble_layer {
            dom::set_opacity(el, update.grade.bubble_opacity());
        }
        for (name, value) in update.grade.css_vars() {
            dom::set_root_var(document, name, &value);
        }
        if let Some(el) = &self.title {
            dom::set_opacity(el, update.title.opacity);
            dom::set_style(el, "transform", &update.title.transform());
            dom::set_style(el, "filter", &update.title.filter());
        }
    }
}

/// Scene-driving triggers. Returns the hero trigger id for snapping.
pub fn wire_hero(
    document: &web::Document,
    triggers: &SharedTriggers,
    session: &Rc<RefCell<Session>>,
) -> Option<usize> {
    let hero = document.get_element_by_id(HERO)?;
    let mut reg = triggers.borrow_mut();

    let elements = HeroElements::find(document);
    let doc = document.clone();
    let hero_session = session.clone();
    let hero_id = reg.add(
        hero.clone(),
        TriggerSpec::new(ScrollMark::top(0.0), ScrollMark::AfterStart(HERO_SCROLL_VIEWPORTS)),
        move |u| {
            if let Some(p) = u.progress {
                let update = hero_session.borrow_mut().on_scroll_progress(p);
                elements.apply(&doc, &update);
            }
        },
    );

    if let Some(indicator) = dom::html_by_id(document, "scroll-indicator") {
        reg.add(
            hero,
            TriggerSpec::new(ScrollMark::top(0.0), ScrollMark::AfterStart(SCROLL_INDICATOR_VIEWPORTS)),
            move |u| {
                if let Some(p) = u.progress {
                    dom::set_opacity(&indicator, scroll_indicator_opacity(p));
                }
            },
        );
    }

    if let Some(section) = document.get_element_by_id(SECTION_2) {
        let session = session.clone();
        reg.add(
            section,
            TriggerSpec::new(ScrollMark::top(0.20), ScrollMark::bottom(1.0)),
            move |u| {
                for &edge in &u.edges {
                    if let Some(enabled) = RENDER_GATE_ACTIONS.action(edge) {
                        session.borrow_mut().set_render_enabled(enabled);
                    }
                }
            },
        );
    }

    Some(hero_id)
}
