//! One labeled coordinate triple (X, Y, Z) of the route form.

use leptos::prelude::*;

use crate::pages::planner::{PlannerControls, SharedRouteForm};
use crate::state::route::PointGroup;

const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

#[component]
pub fn CoordinateTriple(group: PointGroup, legend: &'static str) -> impl IntoView {
    let controls = expect_context::<PlannerControls>();
    let form = expect_context::<SharedRouteForm>();

    let row = move |axis: usize| {
        let control = controls.coordinate(group, axis);
        view! {
            <label class="planner-row">
                <span class="planner-row__label">{AXIS_LABELS[axis]}</span>
                <input
                    class="planner-row__input"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || control.text.get()
                    readonly=move || control.read_only.get()
                    on:change=move |ev| {
                        control.text.set(event_target_value(&ev));
                        form.with_value(|f| f.coordinate(group, axis).commit_edit());
                    }
                />
            </label>
        }
    };

    view! {
        <fieldset class="planner-triple">
            <legend>{legend}</legend>
            {row(0)}
            {row(1)}
            {row(2)}
        </fieldset>
    }
}
