use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};
use crate::core::capture::{cube_face_view_proj, SceneVisibility, CUBE_FACES};
use crate::core::clouds::Billboard;
use crate::core::constants::{
    ENV_FAR, ENV_NEAR, FOG_HEX, MOON_DISK_HEX, MOON_GLOW_HEX, SKY_BOTTOM_HEX, SKY_TOP_HEX,
};
use crate::core::scene::{srgb_hex_to_linear, SceneParameters};
use crate::core::session::moon_light_direction;
use crate::core::sky::StarPoint;
use crate::core::tier::DeviceTier;
use glam::{Mat4, Vec3};
use thiserror::Error;
use web_sys as web;

mod env;
mod helpers;
mod post;
mod scene;
mod targets;
use env::EnvironmentMap;
use post::PostResources;
use scene::{BillboardInstance, BillboardKind, FrameBinding, FrameUniforms, SceneLayers};
use targets::RenderTargets;

const SKY_GRADIENT_EXPONENT: f32 = 0.8;
const CLOUD_TINT: [f32; 3] = [0.05, 0.06, 0.09];

/// Fatal scene startup failures. Any of these puts the page in fallback mode.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("canvas #{0} not found")]
    MissingCanvas(&'static str),
    #[error("surface creation failed: {0}")]
    Surface(String),
    #[error("no WebGPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    Device(String),
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    sampler: wgpu::Sampler,
    layers: SceneLayers,
    env: EnvironmentMap,
    main: FrameBinding,
    post: PostResources,
    width: u32,
    height: u32,
    params: SceneParameters,
    water_time: f32,
    env_ready: bool,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        tier: DeviceTier,
        sky_points: &[StarPoint],
        cloud_capacity: usize,
    ) -> Result<Self, SceneError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| SceneError::Surface(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(SceneError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| SceneError::Device(format!("{:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| SceneError::Surface("no surface formats".to_string()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let sampler = helpers::linear_sampler(&device, "linear_sampler");
        // Two moon quads (glow, disk) ahead of the clouds.
        let layers = SceneLayers::new(&device, sky_points, cloud_capacity + 2);
        let env = EnvironmentMap::new(
            &device,
            tier.env_face_size(),
            &layers.frame_bgl,
            &layers.env_bgl,
            &sampler,
        );
        let main = FrameBinding::new(&device, &layers.frame_bgl, "frame_uniforms");
        let post = PostResources::new(&device, &targets.hdr_view, &sampler, format);
        log::info!(
            "renderer ready: {}x{} {:?}, env face {}",
            width,
            height,
            format,
            env.face_size
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            sampler,
            layers,
            env,
            main,
            post,
            width,
            height,
            params: SceneParameters::default(),
            water_time: 0.0,
            env_ready: false,
        })
    }

    pub fn set_parameters(&mut self, params: &SceneParameters) {
        self.params = *params;
    }

    pub fn set_water_time(&mut self, t: f32) {
        self.water_time = t;
    }

    pub fn update_billboards(&mut self, moon: &[Billboard; 2], clouds: &[Billboard]) {
        let glow = srgb_hex_to_linear(MOON_GLOW_HEX).to_array();
        let disk = srgb_hex_to_linear(MOON_DISK_HEX).to_array();
        let moon = [
            BillboardInstance::pack(&moon[0], BillboardKind::Disc, glow, 0.0),
            BillboardInstance::pack(&moon[1], BillboardKind::Disc, disk, 0.0),
        ];
        let clouds: Vec<BillboardInstance> = clouds
            .iter()
            .enumerate()
            .map(|(i, b)| BillboardInstance::pack(b, BillboardKind::Cloud, CLOUD_TINT, i as f32 * 7.31))
            .collect();
        self.layers.write_billboards(&self.queue, &moon, &clouds);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post.rebind(&self.device, &self.targets.hdr_view, &self.sampler);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn uniforms(&self, view_proj: Mat4, eye: Vec3, resolution: [f32; 2]) -> FrameUniforms {
        let p = &self.params;
        let fog = srgb_hex_to_linear(FOG_HEX);
        let top = srgb_hex_to_linear(SKY_TOP_HEX);
        let bottom = srgb_hex_to_linear(SKY_BOTTOM_HEX);
        let sun = moon_light_direction();
        FrameUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            eye_time: [eye.x, eye.y, eye.z, self.water_time],
            fog: [fog.x, fog.y, fog.z, p.fog_density],
            resolution: [resolution[0], resolution[1], p.water_size, p.distortion_scale],
            water_color: [
                p.water_color.x,
                p.water_color.y,
                p.water_color.z,
                if self.env_ready { 1.0 } else { 0.0 },
            ],
            sky_top: [top.x, top.y, top.z, SKY_GRADIENT_EXPONENT],
            sky_bottom: [bottom.x, bottom.y, bottom.z, 0.0],
            sun_dir: [sun.x, sun.y, sun.z, 0.0],
        }
    }

    fn main_view_proj(&self) -> Mat4 {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR);
        let view = Mat4::look_at_rh(self.params.camera_position, self.params.look_at, Vec3::Y);
        proj * view
    }

    /// Render the six environment faces from the origin with `visibility`
    /// (water and mist already hidden by the caller's capture state).
    pub fn capture_environment(&mut self, visibility: SceneVisibility) {
        let size = self.env.face_size as f32;
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("env_capture"),
            });
        for face in 0..CUBE_FACES.len() {
            let vp = cube_face_view_proj(face, Vec3::ZERO, ENV_NEAR, ENV_FAR);
            let u = self.uniforms(vp, Vec3::ZERO, [size, size]);
            self.env.faces[face].write(&self.queue, &u);
            let mut rpass = self.env.begin_face_pass(&mut encoder, face);
            self.layers.draw(
                &mut rpass,
                &self.env.faces[face].bind_group,
                &self.env.bind_group,
                visibility,
            );
        }
        self.queue.submit(Some(encoder.finish()));
    }

    /// Water samples the environment cube only once it holds a capture.
    pub fn set_env_ready(&mut self, ready: bool) {
        self.env_ready = ready;
    }

    pub fn render(&mut self, visibility: SceneVisibility) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let u = self.uniforms(
            self.main_view_proj(),
            self.params.camera_position,
            [self.width as f32, self.height as f32],
        );
        self.main.write(&self.queue, &u);
        self.post.write_exposure(&self.queue, self.params.exposure);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.layers
                .draw(&mut rpass, &self.main.bind_group, &self.env.bind_group, visibility);
        }
        self.post.blit(&mut encoder, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
