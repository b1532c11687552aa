use crate::constants::{DEFAULT_API_BASE, TRAIN_SCHEDULE_URI};
use crate::logging::log;
use crate::models::{TrainSchedule, TrainSchedulePatch};

/// Read and write access to persisted train schedules
#[allow(async_fn_in_trait)]
pub trait ScheduleApi {
    /// Fetch the full record for `id`
    async fn get_train_schedule(&self, id: i64) -> Result<TrainSchedule, String>;

    /// Replace the stored record with `schedule`
    async fn put_train_schedule(&self, schedule: &TrainSchedule) -> Result<(), String>;
}

/// [`ScheduleApi`] backed by the REST endpoints under `/train_schedule`
#[derive(Debug, Clone)]
pub struct HttpScheduleApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpScheduleApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn schedule_url(&self, id: i64) -> String {
        format!("{}{TRAIN_SCHEDULE_URI}/{id}/", self.base_url.trim_end_matches('/'))
    }
}

impl ScheduleApi for HttpScheduleApi {
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP request fails
    /// - The response status is not ok
    /// - The response body cannot be deserialized
    async fn get_train_schedule(&self, id: i64) -> Result<TrainSchedule, String> {
        self.client
            .get(self.schedule_url(id))
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("Train schedule {id} not available: {e}"))?
            .json::<TrainSchedule>()
            .await
            .map_err(|e| format!("Failed to deserialize: {e}"))
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response status is not ok
    async fn put_train_schedule(&self, schedule: &TrainSchedule) -> Result<(), String> {
        self.client
            .put(self.schedule_url(schedule.id))
            .json(schedule)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?
            .error_for_status()
            .map_err(|e| format!("Train schedule {} not saved: {e}", schedule.id))?;
        Ok(())
    }
}

/// Origin of the page in the browser, [`DEFAULT_API_BASE`] elsewhere
#[must_use]
pub fn default_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return origin;
        }
    }
    DEFAULT_API_BASE.to_string()
}

/// How a [`change_train`] call ended
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeOutcome {
    Updated(TrainSchedule),
    /// Nothing was written
    FetchFailed(String),
    /// The stored record is unchanged
    WriteFailed(String),
}

impl ChangeOutcome {
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Updated(_) => None,
            Self::FetchFailed(e) | Self::WriteFailed(e) => Some(e),
        }
    }
}

/// Apply `patch` to the train schedule `id`
///
/// Fetches the stored record, merges the patch over it in memory (see
/// [`TrainSchedulePatch::apply_over`]) and writes the merged record back
/// in one request. The write is never attempted when the fetch fails.
/// Failures are logged and reported through the outcome, never as a panic
/// or an `Err`.
pub async fn change_train<A: ScheduleApi>(api: &A, patch: &TrainSchedulePatch, id: i64) -> ChangeOutcome {
    let fetched = match api.get_train_schedule(id).await {
        Ok(schedule) => schedule,
        Err(e) => {
            leptos::logging::error!("Failed to fetch train schedule {id}: {e}");
            return ChangeOutcome::FetchFailed(e);
        }
    };

    let merged = patch.apply_over(&fetched, id);

    match api.put_train_schedule(&merged).await {
        Ok(()) => {
            log!("Train schedule {} updated", id);
            ChangeOutcome::Updated(merged)
        }
        Err(e) => {
            leptos::logging::error!("Failed to update train schedule {id}: {e}");
            ChangeOutcome::WriteFailed(e)
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct MockScheduleApi {
        stored: RefCell<Option<TrainSchedule>>,
        fail_write: bool,
        writes: RefCell<Vec<TrainSchedule>>,
    }

    impl MockScheduleApi {
        fn new(stored: Option<TrainSchedule>) -> Self {
            Self {
                stored: RefCell::new(stored),
                fail_write: false,
                writes: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScheduleApi for MockScheduleApi {
        async fn get_train_schedule(&self, id: i64) -> Result<TrainSchedule, String> {
            self.stored
                .borrow()
                .clone()
                .filter(|s| s.id == id)
                .ok_or_else(|| format!("Train schedule {id} not available: 404"))
        }

        async fn put_train_schedule(&self, schedule: &TrainSchedule) -> Result<(), String> {
            self.writes.borrow_mut().push(schedule.clone());
            if self.fail_write {
                return Err("Request failed: connection reset".to_string());
            }
            *self.stored.borrow_mut() = Some(schedule.clone());
            Ok(())
        }
    }

    fn create_test_schedule() -> TrainSchedule {
        TrainSchedule {
            id: 7,
            departure_time: "08:00".to_string(),
            initial_speed: 0.0,
            labels: vec!["A".to_string()],
            path: 3,
            rolling_stock: 5,
            timetable: 1,
            train_name: "T7".to_string(),
        }
    }

    #[tokio::test]
    async fn test_change_train_renames() {
        let api = MockScheduleApi::new(Some(create_test_schedule()));
        let outcome = change_train(&api, &TrainSchedulePatch::train_name("T7-bis"), 7).await;

        let mut expected = create_test_schedule();
        expected.train_name = "T7-bis".to_string();
        assert_eq!(outcome, ChangeOutcome::Updated(expected.clone()));
        assert_eq!(api.writes.borrow().as_slice(), &[expected.clone()]);
        assert_eq!(api.stored.borrow().as_ref(), Some(&expected));
    }

    #[tokio::test]
    async fn test_change_train_keeps_speed_on_zero_edit() {
        let mut stored = create_test_schedule();
        stored.initial_speed = 12.0;
        let api = MockScheduleApi::new(Some(stored));
        let patch = TrainSchedulePatch {
            initial_speed: Some(0.0),
            ..TrainSchedulePatch::default()
        };

        let outcome = change_train(&api, &patch, 7).await;
        let ChangeOutcome::Updated(written) = &outcome else {
            panic!("expected an update, got {outcome:?}");
        };
        assert_eq!(written.initial_speed, 12.0);
    }

    #[tokio::test]
    async fn test_failed_fetch_issues_no_write() {
        let api = MockScheduleApi::new(None);
        let outcome = change_train(&api, &TrainSchedulePatch::train_name("T1"), 1).await;

        assert!(matches!(outcome, ChangeOutcome::FetchFailed(_)));
        assert!(outcome.error().is_some());
        assert!(api.writes.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_record_unchanged() {
        let mut api = MockScheduleApi::new(Some(create_test_schedule()));
        api.fail_write = true;
        let outcome = change_train(&api, &TrainSchedulePatch::train_name("T7-ter"), 7).await;

        assert!(matches!(outcome, ChangeOutcome::WriteFailed(_)));
        assert_eq!(api.writes.borrow().len(), 1);
        assert_eq!(api.stored.borrow().as_ref(), Some(&create_test_schedule()));
    }

    #[test]
    fn test_schedule_url() {
        let api = HttpScheduleApi::new("http://localhost:8080/");
        assert_eq!(api.schedule_url(42), "http://localhost:8080/train_schedule/42/");
    }

    #[test]
    fn test_default_base_url_native() {
        assert_eq!(default_base_url(), DEFAULT_API_BASE);
    }
}
