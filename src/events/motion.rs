use crate::core::motion::MotionPreference;
use crate::core::session::Session;
use crate::dom;
use crate::scroll::SharedTriggers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn apply_motion_ui(document: &web::Document, motion: MotionPreference) {
    if let Some(toggle) = document.get_element_by_id("motion-toggle") {
        _ = toggle.set_attribute("aria-pressed", motion.aria_pressed());
        toggle.set_text_content(Some(motion.toggle_label()));
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root.dataset().set("motion", motion.dataset_value());
    }
}

fn set_reduced(
    document: &web::Document,
    session: &Rc<RefCell<Session>>,
    triggers: &SharedTriggers,
    reduced: bool,
) {
    let motion = {
        let mut s = session.borrow_mut();
        s.set_reduced_motion(reduced);
        s.motion()
    };
    log::info!("motion preference: {}", motion.dataset_value());
    apply_motion_ui(document, motion);
    triggers.borrow_mut().refresh();
}

/// `#motion-toggle` clicks and OS-level preference changes both flip the
/// reduced-motion flag.
pub fn wire_motion_ui(
    window: &web::Window,
    document: &web::Document,
    session: &Rc<RefCell<Session>>,
    triggers: &SharedTriggers,
) {
    apply_motion_ui(document, session.borrow().motion());

    {
        let (doc, session, triggers) = (document.clone(), session.clone(), triggers.clone());
        dom::add_click_listener(document, "motion-toggle", move |_: web::Event| {
            let mut motion = session.borrow().motion();
            motion.toggle();
            set_reduced(&doc, &session, &triggers, motion.reduced);
        });
    }

    if let Some(query) = window.match_media(REDUCED_MOTION_QUERY).ok().flatten() {
        let (doc, session, triggers) = (document.clone(), session.clone(), triggers.clone());
        dom::listen(&query, "change", move |ev: web::MediaQueryListEvent| {
            set_reduced(&doc, &session, &triggers, ev.matches());
        });
    }
}
