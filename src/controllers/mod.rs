pub mod adaptive_quality;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod ports;
pub mod render_context;
