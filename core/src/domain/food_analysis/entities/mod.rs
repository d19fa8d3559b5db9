pub mod nutrition_analysis;

pub use nutrition_analysis::*;
