pub mod email;
pub mod report;

pub use email::EmailService;
pub use report::{export_tasks_csv, generate_daily_report, DailyReport};
