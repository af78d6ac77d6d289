use super::helpers;
use super::scene::FrameBinding;
use wgpu;

/// Cube-map reflection target for the water. Rendered once, then only sampled.
pub(crate) struct EnvironmentMap {
    pub(crate) face_size: u32,
    _cube: wgpu::Texture,
    _depth: wgpu::Texture,
    face_views: Vec<wgpu::TextureView>,
    depth_view: wgpu::TextureView,
    pub(crate) faces: Vec<FrameBinding>,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl EnvironmentMap {
    pub(crate) fn new(
        device: &wgpu::Device,
        face_size: u32,
        frame_bgl: &wgpu::BindGroupLayout,
        env_bgl: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
    ) -> Self {
        let face_size = face_size.max(1);
        let cube = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("env_cube"),
            size: wgpu::Extent3d {
                width: face_size,
                height: face_size,
                depth_or_array_layers: 6,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: helpers::HDR_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let face_views = (0..6)
            .map(|layer| {
                cube.create_view(&wgpu::TextureViewDescriptor {
                    label: Some("env_face"),
                    dimension: Some(wgpu::TextureViewDimension::D2),
                    base_array_layer: layer,
                    array_layer_count: Some(1),
                    ..Default::default()
                })
            })
            .collect();
        let cube_view = cube.create_view(&wgpu::TextureViewDescriptor {
            label: Some("env_cube_view"),
            dimension: Some(wgpu::TextureViewDimension::Cube),
            array_layer_count: Some(6),
            ..Default::default()
        });
        let (depth, depth_view) = helpers::create_depth_texture(device, "env_depth", face_size, face_size);
        let faces = (0..6)
            .map(|_| FrameBinding::new(device, frame_bgl, "env_face_uniforms"))
            .collect();
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("env_bg"),
            layout: env_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&cube_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        Self {
            face_size,
            _cube: cube,
            _depth: depth,
            face_views,
            depth_view,
            faces,
            bind_group,
        }
    }

    /// Begin a pass that clears and draws into one cube face.
    pub(crate) fn begin_face_pass<'e>(
        &self,
        encoder: &'e mut wgpu::CommandEncoder,
        face: usize,
    ) -> wgpu::RenderPass<'e> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("env_face_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &self.face_views[face],
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Discard,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        })
    }
}
