pub mod algorithm;
pub mod errors;
