use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Geographic coordinate used to recentre the map on a via
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    #[must_use]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// Where a via was picked from (map layer, search, ...)
///
/// Carried through to the focus callback untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct ViaSource(pub String);

impl ViaSource {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViaSource {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// An intermediate stop of the itinerary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Via {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub source: ViaSource,
    #[serde(rename = "clickLngLat")]
    pub click_lng_lat: LngLat,
    /// Dwell time in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stoptime: Option<f64>,
}

impl Via {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, source: ViaSource, click_lng_lat: LngLat) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source,
            click_lng_lat,
            stoptime: None,
        }
    }

    /// Stop time in seconds, 0 when none was set
    #[must_use]
    pub fn effective_stop_time(&self) -> f64 {
        self.stoptime.unwrap_or(0.0)
    }

    /// Label shown in the via list: `"{id} {name}"`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.id, self.name)
    }

    /// Stop time as a whole-second duration
    ///
    /// `None` when the stop time does not fit in a [`Duration`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn stop_duration(&self) -> Option<Duration> {
        let seconds = self.effective_stop_time().trunc();
        if seconds.abs() >= i64::MAX as f64 {
            return None;
        }
        Duration::try_seconds(seconds as i64)
    }

    /// Tooltip of the stop time cell: HH:MM:SS, or plain seconds when too large
    #[must_use]
    pub fn stop_time_title(&self) -> String {
        self.stop_duration()
            .map_or_else(|| format!("{}s", format_stop_time(self.effective_stop_time())), duration_to_hhmmss)
    }
}

/// Passed to the map when a via label is clicked
#[derive(Debug, Clone, PartialEq)]
pub struct FocusRequest {
    pub lng_lat: LngLat,
    pub id: String,
    pub source: ViaSource,
}

impl From<&Via> for FocusRequest {
    fn from(via: &Via) -> Self {
        Self {
            lng_lat: via.click_lng_lat,
            id: via.id.clone(),
            source: via.source.clone(),
        }
    }
}

/// Format a stop time the way the via list shows it: integral values
/// without a fractional part
#[must_use]
pub fn format_stop_time(seconds: f64) -> String {
    if seconds.fract() == 0.0 && seconds.is_finite() {
        format!("{seconds:.0}")
    } else {
        seconds.to_string()
    }
}

/// Format a duration as HH:MM:SS, with a leading `-` when negative
#[must_use]
pub fn duration_to_hhmmss(duration: Duration) -> String {
    let sign = if duration < Duration::zero() { "-" } else { "" };
    let total_seconds = duration.num_seconds().unsigned_abs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_via() -> Via {
        Via::new("12", "Gare de Lyon", ViaSource::from("station"), LngLat::new(2.37, 48.84))
    }

    #[test]
    fn test_effective_stop_time_defaults_to_zero() {
        let via = create_test_via();
        assert_eq!(via.effective_stop_time(), 0.0);
    }

    #[test]
    fn test_effective_stop_time_set() {
        let mut via = create_test_via();
        via.stoptime = Some(45.0);
        assert_eq!(via.effective_stop_time(), 45.0);
    }

    #[test]
    fn test_label() {
        assert_eq!(create_test_via().label(), "12 Gare de Lyon");
    }

    #[test]
    fn test_format_stop_time() {
        assert_eq!(format_stop_time(0.0), "0");
        assert_eq!(format_stop_time(120.0), "120");
        assert_eq!(format_stop_time(2.5), "2.5");
        assert_eq!(format_stop_time(-3.0), "-3");
    }

    #[test]
    fn test_stop_duration_display() {
        let mut via = create_test_via();
        via.stoptime = Some(3725.0);
        assert_eq!(via.stop_time_title(), "01:02:05");
    }

    #[test]
    fn test_negative_stop_duration_display() {
        let mut via = create_test_via();
        via.stoptime = Some(-3725.0);
        assert_eq!(via.stop_time_title(), "-01:02:05");
    }

    #[test]
    fn test_huge_stop_time_title() {
        let mut via = create_test_via();
        via.stoptime = crate::models::parse_stop_time("1e17");
        assert_eq!(via.stop_duration(), None);
        assert_eq!(via.stop_time_title(), "100000000000000000s");

        via.stoptime = Some(-1e300);
        assert_eq!(via.stop_duration(), None);
        assert!(via.stop_time_title().starts_with('-'));
    }

    #[test]
    fn test_focus_request_from_via() {
        let via = create_test_via();
        let request = FocusRequest::from(&via);
        assert_eq!(request.lng_lat, LngLat::new(2.37, 48.84));
        assert_eq!(request.id, "12");
        assert_eq!(request.source, ViaSource::from("station"));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "id": "A1",
            "name": "Dijon",
            "source": "track",
            "clickLngLat": { "lng": 5.04, "lat": 47.32 }
        }"#;
        let via: Via = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(via.id, "A1");
        assert_eq!(via.source.as_str(), "track");
        assert_eq!(via.click_lng_lat, LngLat::new(5.04, 47.32));
        assert_eq!(via.stoptime, None);
    }

    #[test]
    fn test_serialize_keeps_stoptime_when_set() {
        let mut via = create_test_via();
        via.stoptime = Some(30.0);
        let value = serde_json::to_value(&via).expect("should serialize");
        assert_eq!(value["stoptime"], 30.0);
        assert!(value.get("clickLngLat").is_some());
    }
}
