pub mod builder;
pub mod curated;
