use anyhow::{Context, Result};

/// Adapter plus the logical device and queue opened on it.
pub(crate) struct DeviceParts {
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

/// Device request shared by the windowed and offscreen contexts.
pub(crate) struct DeviceRequest<'a> {
    pub label: &'a str,
    pub power_preference: wgpu::PowerPreference,
    pub force_fallback_adapter: bool,
    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,
}

/// Creates an instance over all backends so wgpu can pick the platform's best.
pub(crate) fn new_instance() -> wgpu::Instance {
    wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    })
}

/// Selects an adapter (optionally compatible with `surface`) and opens a device on it.
///
/// Adapter/device acquisition is asynchronous under wgpu.
pub(crate) async fn request_device(
    instance: &wgpu::Instance,
    surface: Option<&wgpu::Surface<'_>>,
    req: DeviceRequest<'_>,
) -> Result<DeviceParts> {
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: req.power_preference,
            compatible_surface: surface,
            force_fallback_adapter: req.force_fallback_adapter,
        })
        .await
        .context("failed to find a suitable GPU adapter")?;

    let info = adapter.get_info();
    log::info!("{}: using adapter {:?} ({:?})", req.label, info.name, info.backend);

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some(req.label),
            required_features: req.required_features,
            required_limits: req.required_limits,
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to create wgpu device/queue")?;

    Ok(DeviceParts {
        adapter,
        device,
        queue,
    })
}
