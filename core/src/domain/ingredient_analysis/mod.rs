pub mod commentary;
pub mod engine;
pub mod entities;
pub mod extraction;
pub mod gate;
pub mod helpers;
pub mod matching;
pub mod ports;
pub mod reference;
pub mod schema;
pub mod scoring;
pub mod services;
pub mod value_objects;

pub use engine::{RatedAnalysis, analyze, analyze_rated};
pub use entities::*;
pub use gate::is_ingredients_list;
pub use ports::*;
pub use value_objects::*;
