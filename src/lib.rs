pub mod api;
pub mod errors;
pub mod initializer;
pub mod manifest;
pub mod scaffold;
pub mod utils;

pub use api::{create_project, create_project_with, GoforgeError};
