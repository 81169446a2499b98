pub mod error;
pub mod manager;

pub use error::StoreError;
pub use manager::{Statistics, StoreConfig, TaskManager};
