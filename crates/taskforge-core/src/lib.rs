pub mod error;
pub mod record;
pub mod task;

pub use error::CoreError;
pub use record::TaskRecord;
pub use task::{Priority, Status, Task, TaskId};
