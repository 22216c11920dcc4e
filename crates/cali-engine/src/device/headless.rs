use anyhow::Result;

use crate::coords::Viewport;

use super::adapter::{self, DeviceRequest};
use super::HeadlessInit;

/// Offscreen rendering context: a device plus one color target texture.
///
/// The target is sized from a logical [`Viewport`] (1 logical px = 1 texel).
pub struct HeadlessGpu {
    _instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,

    format: wgpu::TextureFormat,
    viewport: Viewport,
    target: wgpu::Texture,
    view: wgpu::TextureView,
}

impl HeadlessGpu {
    pub async fn new(viewport: Viewport, init: &HeadlessInit) -> Result<Self> {
        anyhow::ensure!(viewport.is_valid(), "invalid viewport {viewport:?}");

        let instance = adapter::new_instance();
        let parts = adapter::request_device(
            &instance,
            None,
            DeviceRequest {
                label: "cali offscreen device",
                power_preference: init.power_preference,
                force_fallback_adapter: init.force_fallback_adapter,
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
            },
        )
        .await?;

        check_target_size(viewport, parts.device.limits().max_texture_dimension_2d)?;
        let (target, view) = create_target(&parts.device, init.format, viewport);

        Ok(Self {
            _instance: instance,
            adapter: parts.adapter,
            device: parts.device,
            queue: parts.queue,
            format: init.format,
            viewport,
            target,
            view,
        })
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The color target texture (usable as a copy source).
    pub fn target(&self) -> &wgpu::Texture {
        &self.target
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Recreates the color target when the pixel size changes.
    ///
    /// Fails without touching the current target when `viewport` is invalid or
    /// exceeds the device's texture limit.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        anyhow::ensure!(viewport.is_valid(), "invalid viewport {viewport:?}");
        check_target_size(viewport, self.device.limits().max_texture_dimension_2d)?;

        let old = self.viewport.pixel_size();
        self.viewport = viewport;
        if old != viewport.pixel_size() {
            let (target, view) = create_target(&self.device, self.format, viewport);
            self.target = target;
            self.view = view;
        }
        Ok(())
    }

    pub fn create_encoder(&self) -> wgpu::CommandEncoder {
        self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("cali offscreen encoder"),
            })
    }

    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

/// Rejects targets whose pixel size exceeds `max_dim` on either axis.
fn check_target_size(viewport: Viewport, max_dim: u32) -> Result<()> {
    let (width, height) = viewport.pixel_size();
    anyhow::ensure!(
        width <= max_dim && height <= max_dim,
        "offscreen target {width}x{height} exceeds the device limit of {max_dim} px per side"
    );
    Ok(())
}

fn create_target(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    viewport: Viewport,
) -> (wgpu::Texture, wgpu::TextureView) {
    let (width, height) = viewport.pixel_size();
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("cali offscreen target"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_within_limit_is_accepted() {
        assert!(check_target_size(Viewport::new(800.0, 600.0), 8192).is_ok());
        assert!(check_target_size(Viewport::new(8192.0, 8192.0), 8192).is_ok());
    }

    #[test]
    fn target_over_limit_is_rejected() {
        let err = check_target_size(Viewport::new(20000.0, 10.0), 8192).unwrap_err();
        assert!(err.to_string().contains("20000x10"), "{err}");
        assert!(check_target_size(Viewport::new(10.0, 8193.0), 8192).is_err());
    }

    #[test]
    fn oversized_viewport_errors_instead_of_panicking() {
        // Either no adapter is available or the size check rejects the target.
        let init = HeadlessInit {
            force_fallback_adapter: true,
            ..Default::default()
        };
        let result = pollster::block_on(HeadlessGpu::new(Viewport::new(20000.0, 10.0), &init));
        assert!(result.is_err());
    }
}
