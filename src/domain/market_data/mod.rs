//! Market data aggregate: price points, series annotation and datum
//! formatting.

pub mod entities;
pub mod sample;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use sample::*;
pub use services::*;
pub use value_objects::*;
