use crate::core::cursor::{CursorFollower, RippleGate};
use crate::dom;
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn spawn_ripple(document: &web::Document, host: &web::HtmlElement, x: f32, y: f32) {
    let Ok(ripple) = document.create_element("div") else {
        return;
    };
    ripple.set_class_name("neon-ripple");
    if let Some(html) = ripple.dyn_ref::<web::HtmlElement>() {
        place(html, x, y);
    }
    _ = host.append_child(&ripple);
    // One-shot: the ripple removes itself, which also frees the callback.
    let done = ripple.clone();
    let cb = Closure::once_into_js(move || done.remove());
    _ = ripple.add_event_listener_with_callback("animationend", cb.unchecked_ref());
}

fn place(el: &web::HtmlElement, x: f32, y: f32) {
    dom::set_style(el, "left", &format!("{}px", x));
    dom::set_style(el, "top", &format!("{}px", y));
}

/// Neon dot + lagging ring cursor with click/move ripples. Off for coarse
/// pointers, reduced motion, or when the markup is missing.
pub fn wire_neon_cursor(window: &web::Window, document: &web::Document, coarse: bool, reduced: bool) {
    if coarse || reduced {
        return;
    }
    let (Some(dot), Some(ring), Some(ripples)) = (
        dom::html_by_id(document, "neon-dot"),
        dom::html_by_id(document, "neon-ring"),
        dom::html_by_id(document, "neon-ripples"),
    ) else {
        return;
    };
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("neon-cursor-on");
    }

    let (w, h) = dom::viewport(window);
    let follower = Rc::new(RefCell::new(CursorFollower::centered(w as f32, h as f32)));
    let mut gate = RippleGate::default();

    {
        let follower = follower.clone();
        let (doc, host) = (document.clone(), ripples.clone());
        dom::listen(window, "mousemove", move |ev: web::MouseEvent| {
            let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
            follower.borrow_mut().set_target(x, y);
            if gate.try_fire(instant::now()) {
                spawn_ripple(&doc, &host, x, y);
            }
        });
    }
    {
        let doc = document.clone();
        dom::listen(window, "mousedown", move |ev: web::MouseEvent| {
            spawn_ripple(&doc, &ripples, ev.client_x() as f32, ev.client_y() as f32);
        });
    }

    frame::start_loop(move || {
        let mut f = follower.borrow_mut();
        f.step();
        place(&dot, f.dot.x, f.dot.y);
        place(&ring, f.ring.x, f.ring.y);
    });
    log::debug!("neon cursor on");
}
