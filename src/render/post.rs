use super::helpers;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    exposure: f32,
    _pad: [f32; 3],
}

/// Tone-map pass: samples the HDR scene target and writes the swapchain.
pub(crate) struct PostResources {
    bgl: wgpu::BindGroupLayout, // tex+sampler+uniform
    uniform_buffer: wgpu::Buffer,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
}

impl PostResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        hdr_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
        swap_format: wgpu::TextureFormat,
    ) -> Self {
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl"),
            entries: &[
                helpers::texture_entry(0, wgpu::TextureViewDimension::D2),
                helpers::sampler_entry(1),
                helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
            ],
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("post_uniforms"),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let pipeline = helpers::make_post_pipeline(device, &layout, &shader, "fs_tonemap", swap_format);
        let bind_group = Self::bind(device, &bgl, &uniform_buffer, hdr_view, sampler);
        Self {
            bgl,
            uniform_buffer,
            pipeline,
            bind_group,
        }
    }

    fn bind(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        uniform_buffer: &wgpu::Buffer,
        hdr_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_hdr"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(hdr_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
        })
    }

    /// The HDR view changes on resize; the bind group must follow it.
    pub(crate) fn rebind(&mut self, device: &wgpu::Device, hdr_view: &wgpu::TextureView, sampler: &wgpu::Sampler) {
        self.bind_group = Self::bind(device, &self.bgl, &self.uniform_buffer, hdr_view, sampler);
    }

    pub(crate) fn write_exposure(&self, queue: &wgpu::Queue, exposure: f32) {
        let u = PostUniforms {
            exposure,
            _pad: [0.0; 3],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn blit(&self, encoder: &mut wgpu::CommandEncoder, target: &wgpu::TextureView) {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tonemap_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
