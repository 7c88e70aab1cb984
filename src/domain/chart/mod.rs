//! Chart aggregate: per-view series state and windowing.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
