pub mod entities;
pub mod fallback;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use fallback::FallbackRecipeBook;
pub use ports::*;
pub use value_objects::*;
