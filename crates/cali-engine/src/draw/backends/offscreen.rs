use anyhow::{Context, Result};

use crate::coords::{Rect, Vec2, Viewport};
use crate::device::{HeadlessGpu, HeadlessInit};
use crate::draw::{BackendKind, DrawBackend, DrawStyle};
use crate::paint::LinearRgba;
use crate::render::{clear_target, PrimitiveRenderer, RenderCtx, RenderTarget};
use crate::scene::DrawList;

/// GPU backend rendering into an offscreen `wgpu` target.
///
/// Draws are recorded and rendered on [`flush`](DrawBackend::flush): the
/// target is cleared to `clear`, the recording is drawn and submitted.
/// Each `initialize` opens a fresh device.
pub struct WgpuBackend {
    init: HeadlessInit,
    clear: LinearRgba,

    gpu: Option<HeadlessGpu>,
    renderer: PrimitiveRenderer,

    list: DrawList,
    viewport: Viewport,
}

impl WgpuBackend {
    pub fn new(init: HeadlessInit) -> Self {
        Self {
            init,
            clear: LinearRgba::transparent(),
            gpu: None,
            renderer: PrimitiveRenderer::new(),
            list: DrawList::new(),
            viewport: Viewport::default(),
        }
    }

    /// Background the target is cleared to on every flush.
    pub fn set_clear(&mut self, clear: LinearRgba) {
        self.clear = clear;
    }

    /// Offscreen context, when initialized (e.g. to copy the target out).
    pub fn gpu(&self) -> Option<&HeadlessGpu> {
        self.gpu.as_ref()
    }

    /// Commands waiting for the next flush.
    pub fn pending(&self) -> &DrawList {
        &self.list
    }
}

impl Default for WgpuBackend {
    fn default() -> Self {
        Self::new(HeadlessInit::default())
    }
}

impl DrawBackend for WgpuBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Wgpu
    }

    fn initialize(&mut self, viewport: Viewport) -> Result<()> {
        // Release the previous device before opening a new one.
        self.shutdown();

        let gpu = pollster::block_on(HeadlessGpu::new(viewport, &self.init))
            .context("failed to initialize wgpu draw backend")?;
        let (w, h) = viewport.pixel_size();
        log::info!("wgpu backend ready: {w}x{h} {:?}", gpu.format());

        self.gpu = Some(gpu);
        self.renderer = PrimitiveRenderer::new();
        self.viewport = viewport;
        Ok(())
    }

    fn shutdown(&mut self) {
        if self.gpu.take().is_some() {
            log::info!("wgpu backend shut down");
        }
        self.list.clear();
    }

    fn is_ready(&self) -> bool {
        self.gpu.is_some()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) -> Result<()> {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize(viewport)
                .context("failed to resize wgpu draw backend")?;
        }
        self.viewport = viewport;
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, style: &DrawStyle) {
        super::record_line(&mut self.list, from, to, style);
    }

    fn draw_rect(&mut self, rect: Rect, style: &DrawStyle) {
        super::record_rect(&mut self.list, rect, style);
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &DrawStyle) {
        super::record_circle(&mut self.list, center, radius, style);
    }

    fn draw_triangle(&mut self, points: [Vec2; 3], style: &DrawStyle) {
        super::record_triangle(&mut self.list, points, style);
    }

    fn flush(&mut self) -> Result<()> {
        let gpu = self.gpu.as_ref().context("wgpu backend is not initialized")?;

        let ctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.format(), gpu.viewport());
        let mut encoder = gpu.create_encoder();
        {
            let mut target = RenderTarget::new(&mut encoder, gpu.view());
            clear_target(&mut target, self.clear);
            self.renderer.render(&ctx, &mut target, &self.list);
        }
        gpu.submit(encoder);

        log::trace!("wgpu backend flushed {} commands", self.list.len());
        self.list.clear();
        Ok(())
    }
}
