use crate::constants::STOP_TIME_DEBOUNCE;
use crate::debounce::use_debounced;
use crate::itinerary_store::ItineraryStore;
use crate::logging::log;
use crate::models::{Settled, StopTimeDraft};
use leptos::{component, create_effect, create_node_ref, create_signal, event_target_value, html, store_value, view, IntoView, Signal, SignalGet, SignalSet, StoredValue};
use std::time::Duration;

/// Inline editor for the stop time of the via at `index`
///
/// Typing updates the field immediately; the itinerary is only updated
/// once the value has been stable for [`STOP_TIME_DEBOUNCE`].
#[component]
pub fn StopTimeInput(index: usize) -> impl IntoView {
    let store = ItineraryStore::expect_context();
    let draft = store_value(StopTimeDraft::new(index, &store.snapshot()));
    let (text, set_text) = create_signal(draft.with_value(|d| d.text().to_string()));
    let input_ref = create_node_ref::<html::Input>();

    follow_stop_time(store, draft, text.into(), STOP_TIME_DEBOUNCE);

    input_ref.on_load(|input| {
        let _ = input.focus();
    });

    view! {
        <span class="stop-time-input">
            <input
                type="number"
                id=format!("via-stoptime-{index}")
                class="stop-time-field"
                node_ref=input_ref
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update_value(|d| d.edit(value.clone()));
                    set_text.set(value);
                }
            />
            <span class="unit">"s"</span>
        </span>
    }
}

/// Store the draft's stop time each time `text` settles for `quiet`
fn follow_stop_time(store: ItineraryStore, draft: StoredValue<StopTimeDraft>, text: Signal<String>, quiet: Duration) {
    let debounced = use_debounced(text, quiet);
    create_effect(move |_| {
        let value = debounced.get();
        settle_stop_time(store, draft, &value);
    });
}

/// Feed one debounced value to the draft; returns whether the itinerary was updated
fn settle_stop_time(store: ItineraryStore, draft: StoredValue<StopTimeDraft>, value: &str) -> bool {
    let Some((index, settled)) = draft.try_update_value(|d| (d.index(), d.settle(value))) else {
        return false;
    };
    match settled {
        Settled::Update(seconds) => store.update_via_stop_time(index, seconds),
        Settled::Invalid => {
            log!("Ignoring stop time {:?} for via {}", value, index);
            false
        }
        Settled::Initial | Settled::Unchanged => false,
    }
}
