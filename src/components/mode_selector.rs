//! Route-type radio group.

use leptos::prelude::*;

use crate::pages::planner::{PlannerControls, SharedRouteForm};
use crate::state::route::RouteMode;

#[component]
pub fn ModeSelector() -> impl IntoView {
    let controls = expect_context::<PlannerControls>();
    let form = expect_context::<SharedRouteForm>();
    let selected = controls.route_type.selected;

    let option = move |mode: RouteMode, label: &'static str| {
        let value = mode.as_str();
        view! {
            <label class="planner-mode__option">
                <input
                    type="radio"
                    name="routeType"
                    value=value
                    prop:checked=move || selected.get() == value
                    on:change=move |_| {
                        // The browser has already marked this radio checked;
                        // mirror that into the control, then notify.
                        selected.set(value.to_owned());
                        form.with_value(|f| f.route_type.commit_selection(value));
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <fieldset class="planner-mode">
            <legend>"Route type"</legend>
            {option(RouteMode::Coordinates, "Coordinates")}
            {option(RouteMode::Manual, "Manual distance")}
        </fieldset>
    }
}
