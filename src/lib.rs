#![cfg(target_arch = "wasm32")]
use crate::core::clouds::CloudField;
use crate::core::constants::{MILKY_WAY_RADIUS, STAR_RADIUS};
use crate::core::motion::MotionPreference;
use crate::core::prefs::{load_intro_behavior, IntroBehavior};
use crate::core::session::Session;
use crate::core::sky::{generate_milky_way, generate_stars};
use crate::core::tier::DeviceTier;
use crate::render::SceneError;
use crate::scroll::{ScrollTriggers, SharedTriggers, SnapDriver};
use crate::storage::LocalStorage;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scroll;
mod storage;

const CANVAS_ID: &str = "webgl-canvas";

/// Put the page into its static fallback: the scene is gone for this visit.
fn fail_scene(document: &web::Document, canvas: Option<&web::HtmlCanvasElement>, err: &SceneError) {
    log::error!("scene unavailable: {}", err);
    if let Some(body) = document.body() {
        _ = body.class_list().add_1("webgl-failed");
    }
    if let Some(canvas) = canvas {
        canvas.remove();
    }
    if let Some(fallback) = dom::html_by_id(document, "webgl-fallback") {
        dom::set_opacity(&fallback, 1.0);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ocean-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });

    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mut rng = StdRng::from_entropy();
    let coarse = dom::matches_media(&window, "(pointer: coarse)");
    let (vw, vh) = dom::viewport(&window);
    let tier = DeviceTier::detect(coarse, vw, vh);
    let reduced = dom::matches_media(&window, events::REDUCED_MOTION_QUERY);
    log::info!("tier: mobileish={} reduced_motion={}", tier.mobileish, reduced);

    let store = Rc::new(RefCell::new(LocalStorage::open()));
    let intro = load_intro_behavior(&*store.borrow());

    let clouds = CloudField::generate(tier.cloud_count(), &mut rng);
    let session = Rc::new(RefCell::new(Session::new(
        MotionPreference::new(reduced),
        tier,
        clouds,
    )));
    let triggers: SharedTriggers = Rc::new(RefCell::new(ScrollTriggers::default()));
    let snap = Rc::new(RefCell::new(SnapDriver::default()));

    // Page overlays first: they work whether or not the scene comes up.
    overlay::wire_page_layers(&document, &triggers, &session, &mut rng);
    events::wire_motion_ui(&window, &document, &session, &triggers);
    events::wire_skip_buttons(&document, &store);
    events::wire_cta_press(&document);
    events::wire_copy_email(&window, &document);
    events::wire_neon_cursor(&window, &document, coarse, reduced);
    scroll::wire_scroll_events(&window, &triggers, &snap);
    triggers.borrow_mut().refresh();

    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        fail_scene(&document, None, &SceneError::MissingCanvas(CANVAS_ID));
        return Ok(());
    };
    dom::sync_canvas_backing_size(&canvas, tier);

    let mut sky_points = generate_stars(tier.star_count(), STAR_RADIUS, tier.star_base_size(), &mut rng);
    sky_points.extend(generate_milky_way(
        tier.milky_way_count(),
        MILKY_WAY_RADIUS,
        tier.milky_way_point_size(),
        &mut rng,
    ));
    let gpu = match frame::init_gpu(&canvas, tier, &sky_points, tier.cloud_count()).await {
        Ok(gpu) => gpu,
        Err(e) => {
            fail_scene(&document, Some(&canvas), &e);
            return Ok(());
        }
    };

    if let Some(hero) = overlay::wire_hero(&document, &triggers, &session) {
        snap.borrow_mut().attach(hero);
    }
    events::wire_camera_pointer(&window, &session);
    events::wire_resize(&window, &canvas, &session, &triggers);
    triggers.borrow_mut().refresh();

    if intro == IntroBehavior::Skip {
        events::skip_intro_now(&window, &document, &triggers);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        gpu,
        canvas,
        rng,
        started: Instant::now(),
    }));
    frame::start_loop(move || frame_ctx.borrow_mut().frame());
    scroll::start_snap_loop(triggers, snap, session);

    log::info!("scene ready");
    Ok(())
}
