use leptos::*;
use leptos_meta::*;
use crate::components::toast::{Toast, ToastNotification};
use crate::components::train_schedule_form::TrainScheduleForm;
use crate::components::via_list::ViaList;
use crate::itinerary_store::ItineraryStore;
use crate::models::{FocusRequest, Itinerary, LngLat, Via, ViaSource};

fn demo_itinerary() -> Itinerary {
    let mut itinerary = Itinerary::default();
    for (id, name, lng, lat) in [
        ("87686006", "Paris Gare de Lyon", 2.3735, 48.8443),
        ("87713040", "Dijon Ville", 5.0272, 47.3233),
        ("87725689", "Macon Loche TGV", 4.7784, 46.2826),
        ("87723197", "Lyon Part Dieu", 4.8594, 45.7606),
    ] {
        itinerary.push(Via::new(id, name, ViaSource::from("stations"), LngLat::new(lng, lat)));
    }
    itinerary
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    ItineraryStore::provide(demo_itinerary());

    let (focus, set_focus) = create_signal(None::<FocusRequest>);
    let (toast, set_toast) = create_signal(Toast::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/via_editor.css"/>
        <Title text="Itinerary"/>

        <div class="app">
            <section class="itinerary-panel">
                <h2>"Vias"</h2>
                <ViaList on_focus=move |request: FocusRequest| set_focus.set(Some(request))/>
            </section>
            <section class="map-focus">
                {move || match focus.get() {
                    Some(request) => format!(
                        "Centred on {} ({}) at {:.4}, {:.4}",
                        request.id,
                        request.source.as_str(),
                        request.lng_lat.lat,
                        request.lng_lat.lng,
                    ),
                    None => "Click a via to centre the map on it".to_string(),
                }}
            </section>
            <section class="train-schedule-panel">
                <h2>"Train schedule"</h2>
                <TrainScheduleForm set_toast=set_toast/>
            </section>
            <ToastNotification toast=toast/>
        </div>
    }
}
