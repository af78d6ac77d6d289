use crate::core::session::Session;
use crate::core::sky::StarPoint;
use crate::core::tier::DeviceTier;
use crate::render::{self, SceneError};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub session: Rc<RefCell<Session>>,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub rng: StdRng,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let mut session = self.session.borrow_mut();
        let Some(plan) = session.begin_tick(elapsed, &mut self.rng) else {
            return;
        };

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        self.gpu.set_parameters(session.params());
        self.gpu.set_water_time(plan.water_time);
        self.gpu
            .update_billboards(&session.moon_billboards(), &session.cloud_billboards());

        if let Some(visibility) = plan.capture {
            self.gpu.capture_environment(visibility);
            session.finish_capture();
            self.gpu.set_env_ready(session.capture_state().is_captured());
        }
        let visibility = session.frame_visibility();
        drop(session);

        match self.gpu.render(visibility) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    tier: DeviceTier,
    sky_points: &[StarPoint],
    cloud_capacity: usize,
) -> Result<render::GpuState<'static>, SceneError> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, tier, sky_points, cloud_capacity).await
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &FrameSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `tick` on every animation frame, forever. Loops pause by gating
/// inside `tick`, never by cancelling.
pub fn start_loop(mut tick: impl FnMut() + 'static) {
    let slot: FrameSlot = Rc::new(RefCell::new(None));
    let slot_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();
        request_frame(&slot_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&slot);
}
