pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{RegistrarError, Result};
pub use service::EnrollmentService;
pub use store::Store;
