//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod geometry;
mod task;

pub use entity::{DomainError, DomainResult};
pub use geometry::{
    ScreenSize, WindowGeometry, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};
pub use task::Task;
