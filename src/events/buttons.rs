use crate::constants::{COPY_CONFIRM_MS, COPY_FALLBACK_MS};
use crate::core::cursor::email_from_href;
use crate::core::prefs::{mark_skipped, KeyValueStore};
use crate::dom;
use crate::scroll::SharedTriggers;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const FIRST_SECTION: &str = "section-1";
const COPY_LABEL: &str = "Copy email";

/// `#skip-intro` and `#skip-to-content` remember the choice and glide past the hero.
pub fn wire_skip_buttons<S: KeyValueStore + 'static>(document: &web::Document, store: &Rc<RefCell<S>>) {
    for id in ["skip-intro", "skip-to-content"] {
        let store = store.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move |ev: web::Event| {
            ev.prevent_default();
            mark_skipped(&mut *store.borrow_mut());
            dom::scroll_to_element(&doc, FIRST_SECTION, web::ScrollBehavior::Smooth);
        });
    }
}

/// A returning visitor who skipped before lands on the first section.
pub fn skip_intro_now(window: &web::Window, document: &web::Document, triggers: &SharedTriggers) {
    let (win, doc, triggers) = (window.clone(), document.clone(), triggers.clone());
    dom::next_animation_frame(window, move || {
        dom::scroll_to_element(&doc, FIRST_SECTION, web::ScrollBehavior::Auto);
        win.scroll_by_with_x_and_y(0.0, 1.0);
        triggers.borrow_mut().refresh();
        log::info!("intro skipped from saved preference");
    });
}

async fn write_clipboard(window: &web::Window, text: &str) -> Result<(), JsValue> {
    let navigator = window.navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))?;
    let write_fn = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?;
    let write_fn: js_sys::Function = write_fn.dyn_into()?;
    let promise: js_sys::Promise = write_fn.call1(&clipboard, &JsValue::from_str(text))?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

pub fn wire_copy_email(window: &web::Window, document: &web::Document) {
    let Some(button) = dom::html_by_id(document, "copy-email") else {
        return;
    };
    let (win, doc) = (window.clone(), document.clone());
    let target = button.clone();
    dom::listen(&target, "click", move |_: web::Event| {
        let href = doc
            .get_element_by_id("email-cta")
            .and_then(|a| a.get_attribute("href"));
        let email = email_from_href(href.as_deref());
        let (win, button) = (win.clone(), button.clone());
        spawn_local(async move {
            let (text, reset_ms) = match write_clipboard(&win, &email).await {
                Ok(()) => ("Copied".to_string(), COPY_CONFIRM_MS),
                Err(e) => {
                    log::debug!("clipboard write failed: {:?}", e);
                    (email, COPY_FALLBACK_MS)
                }
            };
            button.set_text_content(Some(&text));
            let reset = button.clone();
            dom::set_timeout(&win, reset_ms, move || reset.set_text_content(Some(COPY_LABEL)));
        });
    });
}
