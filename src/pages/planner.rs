//! Route distance planner page.
//!
//! ARCHITECTURE
//! ============
//! The page constructs the storage seam, one signal-backed control per
//! on-screen input, and the [`RouteForm`] that owns the persisted fields and
//! their wiring. The form lives in page-local storage (its fields are `Rc`s)
//! and is only touched from event handlers on the browser thread; the
//! signals it drives are what the view renders from.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::controls::{SignalChoiceControl, SignalTextControl};
use crate::components::coordinate_triple::CoordinateTriple;
use crate::components::distance_row::DistanceRow;
use crate::components::mode_selector::ModeSelector;
use crate::fields::{ChoiceControl, TextControl};
use crate::state::route::{MODE_VALUES, PointGroup, RouteControls, RouteForm};
use crate::storage::open_store;

/// Shared handle to the page's field state.
pub type SharedRouteForm = StoredValue<RouteForm, LocalStorage>;

/// Signal bundle driving the planner view, provided via context.
#[derive(Clone, Copy)]
pub struct PlannerControls {
    pub route_type: SignalChoiceControl,
    pub distance: SignalTextControl,
    pub start: [SignalTextControl; 3],
    pub dest: [SignalTextControl; 3],
}

impl PlannerControls {
    fn new() -> Self {
        Self {
            route_type: SignalChoiceControl::new(&MODE_VALUES),
            distance: SignalTextControl::new(),
            start: [
                SignalTextControl::new(),
                SignalTextControl::new(),
                SignalTextControl::new(),
            ],
            dest: [
                SignalTextControl::new(),
                SignalTextControl::new(),
                SignalTextControl::new(),
            ],
        }
    }

    /// The control for one axis (0 = X, 1 = Y, 2 = Z) of a triple.
    pub fn coordinate(self, group: PointGroup, axis: usize) -> SignalTextControl {
        match group {
            PointGroup::Start => self.start[axis],
            PointGroup::Dest => self.dest[axis],
        }
    }

    fn route_controls(self) -> RouteControls {
        RouteControls {
            route_type: Rc::new(self.route_type) as Rc<dyn ChoiceControl>,
            distance: Rc::new(self.distance) as Rc<dyn TextControl>,
            start: self.start.map(|c| Rc::new(c) as Rc<dyn TextControl>),
            dest: self.dest.map(|c| Rc::new(c) as Rc<dyn TextControl>),
        }
    }
}

#[component]
pub fn PlannerPage() -> impl IntoView {
    let controls = PlannerControls::new();
    let store = open_store();
    let form: SharedRouteForm =
        StoredValue::new_local(RouteForm::new(&store, controls.route_controls()));

    provide_context(controls);
    provide_context(form);

    view! {
        <main class="planner">
            <h1 class="planner__title">"Route Planner"</h1>
            <ModeSelector/>
            <div class="planner__points">
                <CoordinateTriple group=PointGroup::Start legend="Start point"/>
                <CoordinateTriple group=PointGroup::Dest legend="Destination"/>
            </div>
            <DistanceRow/>
        </main>
    }
}
