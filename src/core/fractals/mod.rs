pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;

/// An orbit whose magnitude exceeds this is known to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;
