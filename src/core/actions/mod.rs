pub mod fast_eval;
pub mod render_frame;
