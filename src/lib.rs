pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;

pub use crate::controllers::adaptive_quality::AdaptiveQuality;
pub use crate::controllers::config::ExplorerConfig;
pub use crate::controllers::errors::ConfigError;
pub use crate::controllers::ports::frame_sink::{FrameSink, FrameSinkError};
pub use crate::controllers::render_context::RenderContext;
pub use crate::core::actions::render_frame::render_frame::{FrameStats, render_frame};
pub use crate::core::colour_mapping::kinds::ColourStrategyKind;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::frame_size::FrameSize;
pub use crate::core::data::iteration_buffer::IterationBuffer;
pub use crate::core::data::viewport::{ViewCommand, Viewport};
pub use crate::core::fractals::fractal_kinds::FractalKind;
pub use crate::input::cli::args::ExplorerArgs;
#[cfg(feature = "gui")]
pub use crate::input::gui::run_gui::RunGuiCommand;
pub use crate::presenters::file::file_sink_for_path;
