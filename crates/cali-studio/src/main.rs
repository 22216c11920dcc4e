mod overlay;

use cali_engine::device::{CompositeAlphaMode, GpuInit};
use cali_engine::logging::{init_logging, LoggingConfig};
use cali_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use overlay::Overlay;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "cali studio".to_string(),
        initial_size: LogicalSize::new(960.0, 600.0),
        transparent: true,
        decorations: true,
        always_on_top: true,
    };
    let gpu_init = GpuInit {
        alpha_mode: Some(CompositeAlphaMode::PreMultiplied),
        ..GpuInit::default()
    };

    let overlay = Overlay::new()?;
    log::info!("starting overlay");
    Runtime::run(config, gpu_init, overlay)
}
