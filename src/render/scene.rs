use super::helpers::{self, ADDITIVE_BLEND};
use crate::core::capture::SceneVisibility;
use crate::core::clouds::Billboard;
use crate::core::constants::{MIST_EXTENT, MIST_HEIGHT, MIST_OPACITY, WATER_EXTENT};
use crate::core::sky::StarPoint;
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) inv_view_proj: [[f32; 4]; 4],
    pub(crate) eye_time: [f32; 4],
    pub(crate) fog: [f32; 4],
    pub(crate) resolution: [f32; 4],
    pub(crate) water_color: [f32; 4],
    pub(crate) sky_top: [f32; 4],
    pub(crate) sky_bottom: [f32; 4],
    pub(crate) sun_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pos_size: [f32; 4],
    color: [f32; 4],
}

impl PointInstance {
    const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

impl From<&StarPoint> for PointInstance {
    fn from(s: &StarPoint) -> Self {
        Self {
            pos_size: [s.position.x, s.position.y, s.position.z, s.size],
            color: [s.color.x, s.color.y, s.color.z, 1.0],
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) enum BillboardKind {
    Cloud = 0,
    Disc = 1,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BillboardInstance {
    center_opacity: [f32; 4],
    right_kind: [f32; 4],
    up_seed: [f32; 4],
    color: [f32; 4],
}

impl BillboardInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x4,
        1 => Float32x4,
        2 => Float32x4,
        3 => Float32x4
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BillboardInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }

    pub(crate) fn pack(b: &Billboard, kind: BillboardKind, color: [f32; 3], seed: f32) -> Self {
        Self {
            center_opacity: [b.center.x, b.center.y, b.center.z, b.opacity],
            right_kind: [b.right.x, b.right.y, b.right.z, kind as u32 as f32],
            up_seed: [b.up.x, b.up.y, b.up.z, seed],
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Uniform buffer and bind group for one camera (main view or a cube face).
pub(crate) struct FrameBinding {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl FrameBinding {
    pub(crate) fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    pub(crate) fn write(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(uniforms));
    }
}

/// Pipelines and geometry for every scene layer. The same pipelines draw the
/// main view and the environment cube faces (both Rgba16Float + depth).
pub(crate) struct SceneLayers {
    pub(crate) frame_bgl: wgpu::BindGroupLayout,
    pub(crate) env_bgl: wgpu::BindGroupLayout,
    sky: wgpu::RenderPipeline,
    points: wgpu::RenderPipeline,
    billboards: wgpu::RenderPipeline,
    water: wgpu::RenderPipeline,
    mist: wgpu::RenderPipeline,
    point_buffer: wgpu::Buffer,
    point_count: u32,
    billboard_buffer: wgpu::Buffer,
    billboard_capacity: u32,
    moon_count: u32,
    cloud_count: u32,
}

impl SceneLayers {
    pub(crate) fn new(device: &wgpu::Device, points: &[StarPoint], billboard_capacity: usize) -> Self {
        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let env_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("env_bgl"),
            entries: &[
                helpers::texture_entry(0, wgpu::TextureViewDimension::Cube),
                helpers::sampler_entry(1),
            ],
        });
        let pl_frame = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_frame"),
            bind_group_layouts: &[&frame_bgl],
            push_constant_ranges: &[],
        });
        let pl_water = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_water"),
            bind_group_layouts: &[&frame_bgl, &env_bgl],
            push_constant_ranges: &[],
        });

        let module = |label: &str, body: &str| {
            let source = format!("{}\n{}", crate::core::FRAME_WGSL, body);
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(label),
                source: wgpu::ShaderSource::Wgsl(source.into()),
            })
        };
        let sky_shader = module("sky_shader", crate::core::SKY_WGSL);
        let points_shader = module("points_shader", crate::core::POINTS_WGSL);
        let billboard_shader = module("billboard_shader", crate::core::BILLBOARD_WGSL);
        let water_source = format!(
            "const WATER_HALF: f32 = {:.1};\nconst MIST_HALF: f32 = {:.1};\nconst MIST_Y: f32 = {:?};\nconst MIST_OPACITY: f32 = {:?};\n{}",
            WATER_EXTENT * 0.5,
            MIST_EXTENT * 0.5,
            MIST_HEIGHT,
            MIST_OPACITY,
            crate::core::WATER_WGSL
        );
        let water_shader = module("water_shader", &water_source);

        use wgpu::CompareFunction::{Always, Less};
        let sky = helpers::make_scene_pipeline(
            device,
            "sky_pipeline",
            &pl_frame,
            &sky_shader,
            "vs_sky",
            "fs_sky",
            &[],
            None,
            helpers::depth_state(false, Always),
            None,
        );
        let points_pipeline = helpers::make_scene_pipeline(
            device,
            "points_pipeline",
            &pl_frame,
            &points_shader,
            "vs_points",
            "fs_points",
            &[PointInstance::layout()],
            Some(ADDITIVE_BLEND),
            helpers::depth_state(false, Less),
            None,
        );
        let billboards = helpers::make_scene_pipeline(
            device,
            "billboard_pipeline",
            &pl_frame,
            &billboard_shader,
            "vs_billboard",
            "fs_billboard",
            &[BillboardInstance::layout()],
            Some(wgpu::BlendState::ALPHA_BLENDING),
            helpers::depth_state(false, Less),
            None,
        );
        // Water and mist are single-sided: invisible once the camera dips below.
        let water = helpers::make_scene_pipeline(
            device,
            "water_pipeline",
            &pl_water,
            &water_shader,
            "vs_water",
            "fs_water",
            &[],
            None,
            helpers::depth_state(true, Less),
            Some(wgpu::Face::Back),
        );
        let mist = helpers::make_scene_pipeline(
            device,
            "mist_pipeline",
            &pl_water,
            &water_shader,
            "vs_mist",
            "fs_mist",
            &[],
            Some(wgpu::BlendState::ALPHA_BLENDING),
            helpers::depth_state(false, Less),
            Some(wgpu::Face::Back),
        );

        let packed: Vec<PointInstance> = points.iter().map(PointInstance::from).collect();
        let point_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sky_points"),
            contents: bytemuck::cast_slice(&packed),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let billboard_capacity = billboard_capacity.max(1);
        let billboard_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("billboards"),
            size: (billboard_capacity * std::mem::size_of::<BillboardInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            frame_bgl,
            env_bgl,
            sky,
            points: points_pipeline,
            billboards,
            water,
            mist,
            point_buffer,
            point_count: packed.len() as u32,
            billboard_buffer,
            billboard_capacity: billboard_capacity as u32,
            moon_count: 0,
            cloud_count: 0,
        }
    }

    /// Upload moon quads followed by cloud quads.
    pub(crate) fn write_billboards(
        &mut self,
        queue: &wgpu::Queue,
        moon: &[BillboardInstance],
        clouds: &[BillboardInstance],
    ) {
        let mut all = Vec::with_capacity(moon.len() + clouds.len());
        all.extend_from_slice(moon);
        all.extend_from_slice(clouds);
        all.truncate(self.billboard_capacity as usize);
        self.moon_count = moon.len().min(all.len()) as u32;
        self.cloud_count = all.len() as u32 - self.moon_count;
        queue.write_buffer(&self.billboard_buffer, 0, bytemuck::cast_slice(&all));
    }

    /// Record every visible layer into an open scene pass.
    pub(crate) fn draw(
        &self,
        rpass: &mut wgpu::RenderPass<'_>,
        frame_bg: &wgpu::BindGroup,
        env_bg: &wgpu::BindGroup,
        visibility: SceneVisibility,
    ) {
        rpass.set_bind_group(0, frame_bg, &[]);

        rpass.set_pipeline(&self.sky);
        rpass.draw(0..3, 0..1);

        if visibility.water {
            rpass.set_pipeline(&self.water);
            rpass.set_bind_group(1, env_bg, &[]);
            rpass.draw(0..6, 0..1);
        }

        if self.point_count > 0 {
            rpass.set_pipeline(&self.points);
            rpass.set_vertex_buffer(0, self.point_buffer.slice(..));
            rpass.draw(0..6, 0..self.point_count);
        }

        rpass.set_pipeline(&self.billboards);
        rpass.set_vertex_buffer(0, self.billboard_buffer.slice(..));
        if visibility.moon && self.moon_count > 0 {
            rpass.draw(0..6, 0..self.moon_count);
        }
        if visibility.clouds && self.cloud_count > 0 {
            let start = self.moon_count;
            rpass.draw(0..6, start..start + self.cloud_count);
        }

        if visibility.mist {
            rpass.set_pipeline(&self.mist);
            rpass.set_bind_group(1, env_bg, &[]);
            rpass.draw(0..6, 0..1);
        }
    }
}
