use super::{format_stop_time, Itinerary};

/// What a debounced stop time value means for the itinerary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Settled {
    /// The value the input was mounted with
    Initial,
    /// Same text as the previous settled value
    Unchanged,
    /// Text that is not a number
    Invalid,
    /// A stop time to store, in seconds
    Update(f64),
}

/// Editable state behind the stop time input of one via
///
/// The text follows every keystroke. Only debounced text reaches
/// [`StopTimeDraft::settle`], which decides whether the itinerary should be
/// updated. The first settled value is the one the input was mounted with
/// and never produces an update; after that only changed text does.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTimeDraft {
    index: usize,
    text: String,
    last_settled: Option<String>,
}

impl StopTimeDraft {
    /// Start editing the via at `index`, showing its current stop time (0 if unset)
    #[must_use]
    pub fn new(index: usize, itinerary: &Itinerary) -> Self {
        let seconds = itinerary.get(index).map_or(0.0, super::Via::effective_stop_time);
        Self {
            index,
            text: format_stop_time(seconds),
            last_settled: None,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Handle a debounced value
    ///
    /// Only [`Settled::Update`] should reach the itinerary.
    pub fn settle(&mut self, debounced_text: &str) -> Settled {
        match self.last_settled.replace(debounced_text.to_string()) {
            None => return Settled::Initial,
            Some(previous) if previous == debounced_text => return Settled::Unchanged,
            Some(_) => {}
        }
        parse_stop_time(debounced_text).map_or(Settled::Invalid, Settled::Update)
    }
}

/// Parse stop time text as a plain number of seconds
///
/// Negative and fractional values are passed through.
#[must_use]
pub fn parse_stop_time(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
