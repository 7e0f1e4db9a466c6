pub mod todoist_service;
pub mod aggregator_service;

pub use todoist_service::*;
pub use aggregator_service::*;
