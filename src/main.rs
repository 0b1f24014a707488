use std::error::Error;

use clap::Parser;
use log::info;

use fractal_viewer::{ExplorerArgs, FrameSink, RenderContext, file_sink_for_path};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = ExplorerArgs::parse();
    let config = args.to_config()?;
    let mut sink = file_sink_for_path(&args.output)?;
    let mut context = RenderContext::new(config)?;

    info!(
        "rendering {} at {}x{}, centre ({}, {}), zoom {}, max iterations {}, colours {}",
        config.fractal_kind,
        config.frame_size.width(),
        config.frame_size.height(),
        config.viewport.pan_x(),
        config.viewport.pan_y(),
        config.viewport.zoom(),
        config.max_iterations,
        context.colour_map_name()
    );

    let stats = context.render_frame();

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    sink.present(context.frame())?;

    info!(
        "wrote {} in {} ms ({})",
        args.output.display(),
        stats.render_duration.as_millis(),
        context.diagnostics()
    );

    Ok(())
}
