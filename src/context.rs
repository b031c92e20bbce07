use std::sync::Arc;

use anyhow::{anyhow, Context as _, Result};
use wgpu::{Adapter, Device, Queue, Surface, SurfaceConfiguration, SurfaceTexture, TextureFormat};
use winit::window::Window;

/// Owns the GPU connection and the presentation surface.
///
/// Created once during startup and kept alive for the process lifetime.
/// The surface is configured here and reconfigured on resize; everything
/// else (device, queue, format) is immutable after construction.
pub struct GpuContext {
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    config: SurfaceConfiguration,
}

impl GpuContext {
    /// Acquire adapter, device, and a configured surface for the window.
    ///
    /// Every failure here is an unrecoverable environment error: no
    /// compatible adapter, no device, or no drawable surface. Callers
    /// report it and stop.
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create presentation surface")?;

        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let config = SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        log::info!(
            "surface configured: {}x{} {:?}",
            config.width,
            config.height,
            format
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Format the surface presents in; the pipeline's color target must match.
    pub fn format(&self) -> TextureFormat {
        self.config.format
    }

    /// Current surface width in pixels, reflecting the latest resize.
    pub fn width(&self) -> u32 {
        self.config.width
    }

    /// Current surface height in pixels, reflecting the latest resize.
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Reconfigure the surface for a new size. Zero-sized requests
    /// (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        log::info!("surface resized: {}x{}", width, height);
    }

    /// Fresh drawable image for the frame being recorded.
    pub fn current_texture(&self) -> Result<SurfaceTexture> {
        self.surface
            .get_current_texture()
            .context("failed to acquire surface texture")
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &Surface<'_>,
    ) -> Result<Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("no compatible GPU adapter: {e:?}"))
    }

    async fn request_device(adapter: &Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Ripple Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| anyhow!("failed to create device: {e:?}"))
    }
}
