use std::time::Duration;

/// Quiet period before a typed stop time is written to the itinerary
pub const STOP_TIME_DEBOUNCE: Duration = Duration::from_millis(1000);

/// REST collection holding train schedules
pub const TRAIN_SCHEDULE_URI: &str = "/train_schedule";

/// API origin used when the page origin is not available (native builds)
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);
