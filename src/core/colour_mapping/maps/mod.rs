pub mod direct_linear;
pub mod palette_gradient;
