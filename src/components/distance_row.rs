//! Distance readout and manual-entry row.

use leptos::prelude::*;

use crate::pages::planner::{PlannerControls, SharedRouteForm};

#[component]
pub fn DistanceRow() -> impl IntoView {
    let controls = expect_context::<PlannerControls>();
    let form = expect_context::<SharedRouteForm>();
    let control = controls.distance;

    view! {
        <label class="planner-row planner-row--distance">
            <span class="planner-row__label">"Distance"</span>
            <input
                class="planner-row__input"
                type="text"
                inputmode="decimal"
                prop:value=move || control.text.get()
                readonly=move || control.read_only.get()
                on:change=move |ev| {
                    control.text.set(event_target_value(&ev));
                    form.with_value(|f| f.distance.commit_edit());
                }
            />
        </label>
    }
}
