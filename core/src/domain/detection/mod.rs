pub mod entities;
pub mod helpers;
pub mod normalizer;
pub mod ports;
pub mod rules;
pub mod schema;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use normalizer::DetectionNormalizer;
pub use ports::*;
pub use rules::{LabelRules, Synonym};
pub use value_objects::*;
