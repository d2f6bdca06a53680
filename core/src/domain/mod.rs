pub mod common;
pub mod ingredient_analysis;
