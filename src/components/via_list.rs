use crate::components::stop_time_input::StopTimeInput;
use crate::drag::{DragState, ReorderRequest};
use crate::itinerary_store::ItineraryStore;
use crate::models::{format_stop_time, FocusRequest, Itinerary, Via};
use leptos::{component, create_rw_signal, view, Callable, Callback, For, IntoView, RwSignal, Show, Signal, SignalGet, SignalGetUntracked, SignalSet, SignalUpdate, SignalWith, SignalWithUntracked};

/// Ordered, draggable list of the itinerary's vias
///
/// Rows are keyed by index. Clicking a label asks the map to focus the
/// via through `on_focus`; clicking a stop time turns that row (and only
/// that row) into an editor.
#[component]
pub fn ViaList(
    /// Called with the via's position when its label is clicked
    #[prop(into)]
    on_focus: Callback<FocusRequest>,
) -> impl IntoView {
    let store = ItineraryStore::expect_context();
    let itinerary = store.itinerary();
    let selected = create_rw_signal(None::<usize>);
    let drag = create_rw_signal(DragState::default());

    let on_reorder = move |request: Option<ReorderRequest>| {
        if let Some(request) = request {
            selected.set(None);
            request.send_to(&store);
        }
    };

    view! {
        <div class="via-list">
            <For
                each=move || 0..itinerary.with(Itinerary::len)
                key=|index| *index
                children=move |index| {
                    view! {
                        <ViaRow
                            index=index
                            selected=selected
                            drag=drag
                            on_focus=on_focus
                            on_reorder=on_reorder
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn ViaRow(
    index: usize,
    selected: RwSignal<Option<usize>>,
    drag: RwSignal<DragState>,
    on_focus: Callback<FocusRequest>,
    on_reorder: impl Fn(Option<ReorderRequest>) + Copy + 'static,
) -> impl IntoView {
    let store = ItineraryStore::expect_context();
    let itinerary = store.itinerary();
    let via = Signal::derive(move || itinerary.with(|it| it.get(index).cloned()));

    let label = move || via.with(|v| v.as_ref().map(Via::label).unwrap_or_default());
    let stop_time = move || via.with(|v| v.as_ref().map_or(0.0, Via::effective_stop_time));
    let stop_time_title = move || via.with(|v| v.as_ref().map(Via::stop_time_title).unwrap_or_default());

    view! {
        <div
            class=move || {
                let mut classes = vec!["via-row"];
                drag.with(|d| {
                    if d.is_dragging(index) { classes.push("dragging"); }
                    if d.is_over(index) { classes.push("drag-over"); }
                });
                classes.join(" ")
            }
            draggable="true"
            on:dragstart=move |ev| {
                if let Some(dt) = ev.data_transfer() {
                    let _ = dt.set_data("text/plain", &format!("via:{index}"));
                    dt.set_effect_allowed("move");
                }
                drag.update(|d| d.start(index));
            }
            on:dragover=move |ev| {
                ev.prevent_default();
                if let Some(dt) = ev.data_transfer() {
                    dt.set_drop_effect("move");
                }
                if !drag.with_untracked(|d| d.is_over(index)) {
                    drag.update(|d| d.hover(index));
                }
            }
            on:dragleave=move |_| {
                drag.update(|d| d.leave(index));
            }
            on:drop=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                on_reorder(drag.try_update(|d| d.drop_on(index)).flatten());
            }
            on:dragend=move |_| {
                on_reorder(drag.try_update(DragState::end).flatten());
            }
        >
            <i class="fa-solid fa-grip-vertical via-bullet"></i>
            <div
                class="via-label"
                role="button"
                tabindex="0"
                on:click=move |_| {
                    if let Some(via) = via.get_untracked() {
                        on_focus.call(FocusRequest::from(&via));
                    }
                }
            >
                <small class="via-position">{index + 1}</small>
                <small class="via-name">{label}</small>
            </div>
            <div
                class="via-stoptime"
                role="button"
                tabindex="-1"
                title=stop_time_title
                on:click=move |_| selected.set(Some(index))
            >
                <Show
                    when=move || selected.get() == Some(index)
                    fallback=move || view! {
                        {move || format_stop_time(stop_time())}
                        <i class="fa-solid fa-pencil"></i>
                    }
                >
                    <StopTimeInput index=index/>
                </Show>
            </div>
            <button
                class="delete-via-button"
                type="button"
                on:click=move |_| {
                    selected.set(None);
                    store.delete_via(index);
                }
            >
                <i class="fa-solid fa-circle-minus"></i>
                <span class="sr-only" aria-hidden="true">"Delete"</span>
            </button>
        </div>
    }
}
