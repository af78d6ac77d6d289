use crate::core::cursor::pointer_ndc;
use crate::core::session::Session;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mouse position feeds the camera sway.
pub fn wire_camera_pointer(window: &web::Window, session: &Rc<RefCell<Session>>) {
    let session = session.clone();
    let win = window.clone();
    dom::listen(window, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::viewport(&win);
        let ndc = pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, w as f32, h as f32);
        session.borrow_mut().set_pointer(ndc.x, ndc.y);
    });
}

/// `[data-cta]` elements carry `is-pressed` while a pointer is down on them.
pub fn wire_cta_press(document: &web::Document) {
    for el in dom::query_all(document, "[data-cta]") {
        let pressed = el.clone();
        dom::listen(&el, "pointerdown", move |_: web::PointerEvent| {
            _ = pressed.class_list().add_1("is-pressed");
        });
        for event in ["pointerup", "pointercancel"] {
            let released = el.clone();
            dom::listen(&el, event, move |_: web::PointerEvent| {
                _ = released.class_list().remove_1("is-pressed");
            });
        }
    }
}

/// Resize keeps the canvas backing store in step; the renderer picks the new
/// size (and aspect) up on its next frame. Trigger spans are re-resolved.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    session: &Rc<RefCell<Session>>,
    triggers: &crate::scroll::SharedTriggers,
) {
    let canvas = canvas.clone();
    let tier = session.borrow().tier();
    let triggers = triggers.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas, tier);
        triggers.borrow_mut().refresh();
    });
}
