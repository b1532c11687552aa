pub mod train_schedule;

pub use train_schedule::{change_train, default_base_url, ChangeOutcome, HttpScheduleApi, ScheduleApi};
