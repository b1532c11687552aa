use crate::api::{change_train, default_base_url, ChangeOutcome, HttpScheduleApi};
use crate::components::toast::{show_toast, Toast};
use crate::models::TrainSchedulePatch;
use leptos::{component, create_signal, event_target_value, spawn_local, view, IntoView, SignalGet, SignalGetUntracked, SignalSet, WriteSignal};

/// Form editing a persisted train schedule
///
/// Only filled-in fields are sent; everything else keeps its stored value.
#[component]
pub fn TrainScheduleForm(set_toast: WriteSignal<Toast>) -> impl IntoView {
    let (schedule_id, set_schedule_id) = create_signal(String::new());
    let (train_name, set_train_name) = create_signal(String::new());
    let (departure_time, set_departure_time) = create_signal(String::new());
    let (initial_speed, set_initial_speed) = create_signal(String::new());
    let (labels, set_labels) = create_signal(String::new());
    let (is_saving, set_is_saving) = create_signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(id) = schedule_id.get_untracked().trim().parse::<i64>() else {
            show_toast(set_toast, Toast::error("Enter a numeric train schedule id".to_string()));
            return;
        };

        let patch = match TrainSchedulePatch::from_form(
            &train_name.get_untracked(),
            &departure_time.get_untracked(),
            &initial_speed.get_untracked(),
            &labels.get_untracked(),
        ) {
            Ok(patch) => patch,
            Err(e) => {
                show_toast(set_toast, Toast::error(e));
                return;
            }
        };

        set_is_saving.set(true);
        spawn_local(async move {
            let api = HttpScheduleApi::new(default_base_url());
            let toast = match change_train(&api, &patch, id).await {
                ChangeOutcome::Updated(schedule) => Toast::new(format!("Saved {}", schedule.train_name)),
                ChangeOutcome::FetchFailed(e) => Toast::error(format!("Could not load train schedule {id}: {e}")),
                ChangeOutcome::WriteFailed(e) => Toast::error(format!("Could not save train schedule {id}: {e}")),
            };
            show_toast(set_toast, toast);
            set_is_saving.set(false);
        });
    };

    view! {
        <form class="train-schedule-form" on:submit=submit>
            <label>
                "Train schedule"
                <input
                    type="number"
                    prop:value=move || schedule_id.get()
                    on:input=move |ev| set_schedule_id.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || train_name.get()
                    on:input=move |ev| set_train_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Departure"
                <input
                    type="text"
                    placeholder="08:00"
                    prop:value=move || departure_time.get()
                    on:input=move |ev| set_departure_time.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Initial speed"
                <input
                    type="number"
                    prop:value=move || initial_speed.get()
                    on:input=move |ev| set_initial_speed.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Labels"
                <input
                    type="text"
                    placeholder="label, other label"
                    prop:value=move || labels.get()
                    on:input=move |ev| set_labels.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || is_saving.get()>
                {move || if is_saving.get() { "Saving..." } else { "Save" }}
            </button>
        </form>
    }
}
