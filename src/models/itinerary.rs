use serde::{Deserialize, Serialize};
use super::Via;

/// Ordered list of vias
///
/// The sequence is only changed through [`Itinerary::permute`],
/// [`Itinerary::update_stop_time`] and [`Itinerary::delete`], plus
/// [`Itinerary::push`] for vias picked on the map. Each call touches
/// exactly one index; indices that fall outside the list are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Itinerary {
    vias: Vec<Via>,
}

impl Itinerary {
    #[must_use]
    pub fn new(vias: Vec<Via>) -> Self {
        Self { vias }
    }

    #[must_use]
    pub fn vias(&self) -> &[Via] {
        &self.vias
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Via> {
        self.vias.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vias.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vias.is_empty()
    }

    /// Append a via at the end of the itinerary
    pub fn push(&mut self, via: Via) {
        self.vias.push(via);
    }

    /// Move the via at `source` to `destination`
    ///
    /// Vias between the two positions shift by one. A missing destination
    /// (drag released outside the list), `source == destination` or an
    /// out-of-range index leave the itinerary as it was.
    ///
    /// Returns whether the order changed.
    pub fn permute(&mut self, source: usize, destination: Option<usize>) -> bool {
        let Some(destination) = destination else {
            return false;
        };
        if source == destination || source >= self.vias.len() || destination >= self.vias.len() {
            return false;
        }

        let via = self.vias.remove(source);
        self.vias.insert(destination, via);
        true
    }

    /// Set the stop time of the via at `index`
    ///
    /// Returns false when there is no via at that index.
    pub fn update_stop_time(&mut self, index: usize, seconds: f64) -> bool {
        match self.vias.get_mut(index) {
            Some(via) => {
                via.stoptime = Some(seconds);
                true
            }
            None => false,
        }
    }

    /// Remove the via at `index`, shifting the following ones down
    pub fn delete(&mut self, index: usize) -> Option<Via> {
        if index < self.vias.len() {
            Some(self.vias.remove(index))
        } else {
            None
        }
    }
}
