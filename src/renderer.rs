use std::sync::Arc;

use anyhow::Result;
use winit::window::Window;

use crate::context::GpuContext;
use crate::pipeline::PatternPipeline;
use crate::uniforms::{PatternUniforms, UniformBinding};

/// Orchestrates the full-screen pattern: GPU context, pipeline, and the
/// per-frame uniform update + draw.
///
/// Construction is two-phase by type: `new` either yields a renderer with
/// every GPU handle in place or fails fatally. There is no half-initialized
/// state to check at render time.
pub struct Renderer {
    context: GpuContext,
    pipeline: PatternPipeline,
    uniforms: UniformBinding,
}

impl Renderer {
    /// Run the full initialization sequence: device and surface, then
    /// pipeline, then the uniform buffer and its binding. Each step must
    /// succeed before the next runs; any failure aborts startup.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let context = GpuContext::new(window).await?;
        let pipeline = PatternPipeline::new(context.device(), context.format());
        let uniforms = UniformBinding::new(context.device(), pipeline.bind_group_layout());

        log::info!("renderer initialized");

        Ok(Self {
            context,
            pipeline,
            uniforms,
        })
    }

    /// Forwarded from the window's resize event; reconfigures the surface.
    /// No pipeline or buffer is recreated; the next frame picks up the new
    /// dimensions when it writes the uniforms.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
    }

    /// Render one frame at the given simulation time.
    ///
    /// Writes the current surface dimensions and the time into the uniform
    /// buffer, then records and submits a single 3-vertex draw. A platform
    /// failure here is unrecoverable; there is no retry.
    pub fn render(&mut self, time: f32) -> Result<()> {
        let surface_texture = self.context.current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Pattern Encoder"),
                });

        {
            let mut pass = self.pipeline.pass().begin(&mut encoder, &view);
            pass.set_pipeline(self.pipeline.pipeline());

            self.uniforms.write(
                self.context.queue(),
                PatternUniforms::new(
                    self.context.width() as f32,
                    self.context.height() as f32,
                    time,
                ),
            );
            pass.set_bind_group(0, self.uniforms.bind_group(), &[]);
            pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        self.context.queue().submit(Some(encoder.finish()));
        surface_texture.present();

        Ok(())
    }
}
