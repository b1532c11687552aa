use crate::drag::ReorderHandler;
use crate::logging::log;
use crate::models::{Itinerary, Via};
use leptos::{create_rw_signal, provide_context, use_context, RwSignal, Signal, SignalGetUntracked, SignalUpdate, SignalWith, SignalWithUntracked};

/// Owner of the current itinerary
///
/// Views read the itinerary through [`ItineraryStore::itinerary`]; the
/// mutation methods below are the only way to change it. The store is
/// `Copy` and is shared through Leptos context.
#[derive(Clone, Copy)]
pub struct ItineraryStore {
    itinerary: RwSignal<Itinerary>,
}

impl ItineraryStore {
    #[must_use]
    pub fn new(itinerary: Itinerary) -> Self {
        Self {
            itinerary: create_rw_signal(itinerary),
        }
    }

    /// Create a store and make it available to child components
    pub fn provide(itinerary: Itinerary) -> Self {
        let store = Self::new(itinerary);
        provide_context(store);
        store
    }

    /// Get the store provided by an ancestor component
    ///
    /// # Panics
    ///
    /// Panics if no ancestor called [`ItineraryStore::provide`].
    #[must_use]
    pub fn expect_context() -> Self {
        use_context::<Self>().expect("ItineraryStore context not found")
    }

    /// Read-only, reactive view of the itinerary
    #[must_use]
    pub fn itinerary(&self) -> Signal<Itinerary> {
        self.itinerary.read_only().into()
    }

    #[must_use]
    pub fn snapshot(&self) -> Itinerary {
        self.itinerary.get_untracked()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.itinerary.with(Itinerary::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.itinerary.with(Itinerary::is_empty)
    }

    /// Append a via picked on the map
    pub fn push_via(&self, via: Via) {
        log!("Adding via {}", via.label());
        self.itinerary.update(|itinerary| itinerary.push(via));
    }

    /// Move a via after a completed drag
    ///
    /// `destination` is `None` when the drag ended outside the list.
    pub fn permute_vias(&self, source: usize, destination: Option<usize>) -> bool {
        if !self.itinerary.with_untracked(|itinerary| is_valid_move(itinerary, source, destination)) {
            return false;
        }
        log!("Moving via {} to {:?}", source, destination);
        self.itinerary
            .try_update(|itinerary| itinerary.permute(source, destination))
            .unwrap_or(false)
    }

    pub fn update_via_stop_time(&self, index: usize, seconds: f64) -> bool {
        if index >= self.itinerary.with_untracked(Itinerary::len) {
            return false;
        }
        log!("Stop time of via {} set to {}s", index, seconds);
        self.itinerary
            .try_update(|itinerary| itinerary.update_stop_time(index, seconds))
            .unwrap_or(false)
    }

    pub fn delete_via(&self, index: usize) -> Option<Via> {
        if index >= self.itinerary.with_untracked(Itinerary::len) {
            return None;
        }
        log!("Deleting via {}", index);
        self.itinerary.try_update(|itinerary| itinerary.delete(index)).flatten()
    }
}

impl ReorderHandler for ItineraryStore {
    fn on_reorder_requested(&self, source: usize, destination: Option<usize>) {
        self.permute_vias(source, destination);
    }
}

// Checked up front so that rejected moves do not notify subscribers
fn is_valid_move(itinerary: &Itinerary, source: usize, destination: Option<usize>) -> bool {
    destination.is_some_and(|destination| {
        source != destination && source < itinerary.len() && destination < itinerary.len()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LngLat, ViaSource};
    use leptos::create_runtime;

    fn create_test_itinerary() -> Itinerary {
        Itinerary::new(
            ["Lyon", "Dijon", "Macon"]
                .iter()
                .enumerate()
                .map(|(i, name)| Via::new(format!("{i}"), *name, ViaSource::from("map"), LngLat::new(4.8, 45.7)))
                .collect(),
        )
    }

    fn names(store: &ItineraryStore) -> Vec<String> {
        store.snapshot().vias().iter().map(|v| v.name.clone()).collect()
    }

    #[test]
    fn test_store_permute() {
        let runtime = create_runtime();
        let store = ItineraryStore::new(create_test_itinerary());

        assert!(store.permute_vias(0, Some(2)));
        assert_eq!(names(&store), vec!["Dijon", "Macon", "Lyon"]);

        assert!(!store.permute_vias(1, None));
        assert!(!store.permute_vias(1, Some(1)));
        assert_eq!(names(&store), vec!["Dijon", "Macon", "Lyon"]);
        runtime.dispose();
    }

    #[test]
    fn test_store_stop_time_and_delete() {
        let runtime = create_runtime();
        let store = ItineraryStore::new(create_test_itinerary());

        assert!(store.update_via_stop_time(1, 120.0));
        assert!(!store.update_via_stop_time(3, 120.0));
        assert_eq!(store.snapshot().vias()[1].stoptime, Some(120.0));

        let removed = store.delete_via(0).expect("via 0 exists");
        assert_eq!(removed.name, "Lyon");
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot().vias()[0].stoptime, Some(120.0));
        assert!(store.delete_via(5).is_none());
        runtime.dispose();
    }

    #[test]
    fn test_store_handles_reorder_requests() {
        let runtime = create_runtime();
        let store = ItineraryStore::new(create_test_itinerary());

        store.on_reorder_requested(2, Some(0));
        assert_eq!(names(&store), vec!["Macon", "Lyon", "Dijon"]);
        store.on_reorder_requested(0, None);
        assert_eq!(names(&store), vec!["Macon", "Lyon", "Dijon"]);
        runtime.dispose();
    }

    #[test]
    fn test_store_push_and_read_signal() {
        let runtime = create_runtime();
        let store = ItineraryStore::new(Itinerary::default());
        let itinerary = store.itinerary();
        assert!(store.is_empty());

        store.push_via(Via::new("9", "Paris", ViaSource::default(), LngLat::new(2.35, 48.85)));
        assert_eq!(itinerary.with_untracked(Itinerary::len), 1);
        runtime.dispose();
    }
}
