pub mod components;
pub mod models;
pub mod services;

pub use components::*;
pub use models::*;
pub use services::*;
