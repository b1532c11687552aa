use serde::{Deserialize, Serialize};

/// A persisted train schedule, as served by `/train_schedule/{id}/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainSchedule {
    pub id: i64,
    pub departure_time: String,
    pub initial_speed: f64,
    #[serde(default)]
    pub labels: Vec<String>,
    pub path: i64,
    pub rolling_stock: i64,
    pub timetable: i64,
    pub train_name: String,
}

/// Fields a caller wants to change on a train schedule
///
/// `None` means the field is left as fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrainSchedulePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rolling_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timetable: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub train_name: Option<String>,
}

/// Whether a patch value counts as "provided" when merging
trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        true
    }
}

fn pick<T: Truthy + Clone>(edit: Option<&T>, fetched: &T) -> T {
    match edit {
        Some(value) if value.is_truthy() => value.clone(),
        _ => fetched.clone(),
    }
}

impl TrainSchedulePatch {
    #[must_use]
    pub fn train_name(name: impl Into<String>) -> Self {
        Self {
            train_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Build the record to persist from a freshly fetched one
    ///
    /// A patch value replaces the fetched value only when it is truthy:
    /// empty strings and zero numbers fall back to the fetched value, so a
    /// patch cannot set `initial_speed` to 0. This is a known defect kept
    /// for compatibility with existing callers. Labels always override,
    /// even when empty.
    #[must_use]
    pub fn apply_over(&self, fetched: &TrainSchedule, id: i64) -> TrainSchedule {
        TrainSchedule {
            id,
            departure_time: pick(self.departure_time.as_ref(), &fetched.departure_time),
            initial_speed: pick(self.initial_speed.as_ref(), &fetched.initial_speed),
            labels: pick(self.labels.as_ref(), &fetched.labels),
            path: pick(self.path.as_ref(), &fetched.path),
            rolling_stock: pick(self.rolling_stock.as_ref(), &fetched.rolling_stock),
            timetable: pick(self.timetable.as_ref(), &fetched.timetable),
            train_name: pick(self.train_name.as_ref(), &fetched.train_name),
        }
    }

    /// Build a patch from the text fields of the train schedule form
    ///
    /// Blank fields are left out. Labels are comma separated.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial speed is not a number.
    pub fn from_form(train_name: &str, departure_time: &str, initial_speed: &str, labels: &str) -> Result<Self, String> {
        let non_blank = |value: &str| Some(value.trim()).filter(|v| !v.is_empty()).map(str::to_string);

        let initial_speed = match non_blank(initial_speed) {
            Some(speed) => Some(
                speed
                    .parse::<f64>()
                    .map_err(|e| format!("Invalid initial speed {speed:?}: {e}"))?,
            ),
            None => None,
        };

        let labels = non_blank(labels).map(|labels| {
            labels
                .split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect()
        });

        Ok(Self {
            departure_time: non_blank(departure_time),
            initial_speed,
            labels,
            train_name: non_blank(train_name),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
