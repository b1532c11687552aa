#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod stop_time_input;
pub mod toast;
pub mod train_schedule_form;
pub mod via_list;
