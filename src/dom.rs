use crate::core::tier::DeviceTier;
use crate::core::trigger::ElementBounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn child_html(parent: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen(&el, "click", handler);
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_opacity(el: &web::HtmlElement, opacity: f32) {
    set_style(el, "opacity", &opacity.to_string());
}

/// Set a custom property on `<html>`.
pub fn set_root_var(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, name, value);
    }
}

pub fn matches_media(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn viewport(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Element extent in document coordinates for the current scroll offset.
pub fn element_bounds(el: &web::Element, scroll_y: f64) -> ElementBounds {
    let rect = el.get_bounding_client_rect();
    ElementBounds {
        top: rect.top() + scroll_y,
        bottom: rect.bottom() + scroll_y,
    }
}

/// Match the canvas backing store to its CSS size times the tier-capped DPR.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, tier: DeviceTier) -> (u32, u32) {
    let Some(w) = web::window() else {
        return (canvas.width(), canvas.height());
    };
    let dpr = tier.effective_pixel_ratio(w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

pub fn set_timeout(window: &web::Window, delay_ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
}

pub fn next_animation_frame(window: &web::Window, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    _ = window.request_animation_frame(cb.unchecked_ref());
}

pub fn scroll_to_element(document: &web::Document, id: &str, behavior: web::ScrollBehavior) {
    if let Some(el) = document.get_element_by_id(id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(behavior);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}
