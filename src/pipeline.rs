use wgpu::{BindGroupLayout, Device, RenderPipeline, TextureFormat, TextureView};

/// Builds the single render pipeline and its resource-binding layout.
///
/// The whole effect needs no vertex data: three vertices that over-cover the
/// viewport are synthesized in the shader from the built-in vertex index, so
/// the only bound resource is the uniform block at group 0, binding 0.
pub struct PatternPipeline {
    pipeline: RenderPipeline,
    bind_group_layout: BindGroupLayout,
    pass: PassTemplate,
}

impl PatternPipeline {
    /// Compile the shader module and construct the pipeline for the given
    /// surface format. Shader or layout rejection by the platform is a fatal
    /// initialization failure and propagates as a wgpu validation error.
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Ripple Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("ripple.wgsl").into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Pattern Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Pattern Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Pattern Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            bind_group_layout,
            pass: PassTemplate::default(),
        }
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    /// Layout the uniform binding set must be built against.
    pub fn bind_group_layout(&self) -> &BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn pass(&self) -> &PassTemplate {
        &self.pass
    }
}

/// Reusable description of the single color output: clear on load, keep on
/// store. The template itself never changes; each frame builds its own
/// descriptor from it plus the current drawable view.
#[derive(Debug, Clone, Copy)]
pub struct PassTemplate {
    clear_color: wgpu::Color,
}

impl Default for PassTemplate {
    fn default() -> Self {
        Self {
            clear_color: wgpu::Color::TRANSPARENT,
        }
    }
}

impl PassTemplate {
    /// Begin a render pass targeting the given view of this frame's
    /// drawable image.
    pub fn begin<'a>(
        &self,
        encoder: &'a mut wgpu::CommandEncoder,
        view: &TextureView,
    ) -> wgpu::RenderPass<'a> {
        encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Pattern Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear_color),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        })
    }
}
