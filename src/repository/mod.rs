//! Repository Layer
//!
//! Data access: JSON-file-backed stores for the task list and the window
//! geometry.

mod geometry_repo;
mod scaling;
mod store;
mod task_repo;


pub use geometry_repo::{GeometryRepository, RawGeometry};
pub use scaling::{FixedScaling, ScalingProvider};
pub use store::JsonFileStore;
pub use task_repo::TaskRepository;
