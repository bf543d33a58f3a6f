pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::*;
pub use router::init_classes_router;
