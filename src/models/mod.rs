mod itinerary;
mod stop_time_draft;
mod train_schedule;
mod via;

pub use itinerary::Itinerary;
pub use stop_time_draft::{parse_stop_time, Settled, StopTimeDraft};
pub use train_schedule::{TrainSchedule, TrainSchedulePatch};
pub use via::{duration_to_hhmmss, format_stop_time, FocusRequest, LngLat, Via, ViaSource};
