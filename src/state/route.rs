//! Route planner form state and wiring.
//!
//! DESIGN
//! ======
//! One explicit struct owns the seven persisted fields and installs the two
//! page behaviors: the route-type toggle flips which controls are read-only,
//! and a binding over the toggle plus the six coordinates recomputes the
//! distance field while the route type is `coordinates`.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::rc::Rc;

use crate::fields::{bind, ChoiceControl, ChoiceField, FormField, TextControl, TextField};
use crate::storage::KeyValueStore;
use crate::util::numeric::{coerce_number, euclidean_distance, format_number};

/// Storage keys. Stable so previously saved routes keep loading.
pub const ROUTE_TYPE_KEY: &str = "routeType";
pub const DISTANCE_KEY: &str = "distance";
pub const START_KEYS: [&str; 3] = ["startXCoordinate", "startYCoordinate", "startZCoordinate"];
pub const DEST_KEYS: [&str; 3] = ["destXCoordinate", "destYCoordinate", "destZCoordinate"];

/// Default for the distance and every coordinate field.
pub const NUMERIC_DEFAULT: &str = "0";

/// How the distance value is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteMode {
    /// Distance is computed from the two coordinate triples; the distance
    /// control is locked.
    #[default]
    Coordinates,
    /// Distance is typed in directly; the coordinate controls are locked.
    Manual,
}

/// Radio-group option values, in display order.
pub const MODE_VALUES: [&str; 2] = [
    RouteMode::Coordinates.as_str(),
    RouteMode::Manual.as_str(),
];

impl RouteMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            RouteMode::Coordinates => "coordinates",
            RouteMode::Manual => "manual",
        }
    }

    /// Any stored value other than `coordinates` behaves as manual entry.
    pub fn from_value(value: &str) -> Self {
        if value == RouteMode::Coordinates.as_str() {
            RouteMode::Coordinates
        } else {
            RouteMode::Manual
        }
    }
}

/// Control handles for all seven fields, supplied by the view layer (or by
/// stubs in tests).
pub struct RouteControls {
    pub route_type: Rc<dyn ChoiceControl>,
    pub distance: Rc<dyn TextControl>,
    pub start: [Rc<dyn TextControl>; 3],
    pub dest: [Rc<dyn TextControl>; 3],
}

/// Which coordinate triple a control belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointGroup {
    Start,
    Dest,
}

/// The page's application state: seven persisted fields plus their wiring.
pub struct RouteForm {
    pub route_type: Rc<ChoiceField>,
    pub distance: Rc<TextField>,
    pub start: [Rc<TextField>; 3],
    pub dest: [Rc<TextField>; 3],
}

impl RouteForm {
    /// Build all fields from the store and install the read-only and
    /// distance rules.
    pub fn new(store: &Rc<dyn KeyValueStore>, controls: RouteControls) -> Self {
        let route_type = Rc::new(ChoiceField::new(
            ROUTE_TYPE_KEY,
            RouteMode::Coordinates.as_str(),
            controls.route_type,
            Rc::clone(store),
        ));
        let distance = Rc::new(TextField::new(
            DISTANCE_KEY,
            NUMERIC_DEFAULT,
            controls.distance,
            Rc::clone(store),
        ));
        let start = coordinate_fields(&START_KEYS, controls.start, store);
        let dest = coordinate_fields(&DEST_KEYS, controls.dest, store);

        let form = Self { route_type, distance, start, dest };
        form.install_rules();
        form
    }

    pub fn mode(&self) -> RouteMode {
        RouteMode::from_value(&self.route_type.value())
    }

    /// The coordinate field for one axis (0 = X, 1 = Y, 2 = Z) of a triple.
    pub fn coordinate(&self, group: PointGroup, axis: usize) -> &Rc<TextField> {
        match group {
            PointGroup::Start => &self.start[axis],
            PointGroup::Dest => &self.dest[axis],
        }
    }

    fn install_rules(&self) {
        self.install_read_only_rule();
        self.install_distance_rule();
        // Apply the lock state once so a reload in manual mode starts
        // consistent instead of waiting for the first toggle.
        self.apply_read_only(self.mode());
    }

    fn apply_read_only(&self, mode: RouteMode) {
        apply_read_only(&self.distance, &coordinate_list(&self.start, &self.dest), mode);
    }

    /// Toggling the route type flips which side of the form is editable.
    fn install_read_only_rule(&self) {
        let distance = Rc::clone(&self.distance);
        let coordinates = coordinate_list(&self.start, &self.dest);
        self.route_type.add_change_listener(Rc::new(move |change| {
            apply_read_only(&distance, &coordinates, RouteMode::from_value(&change.new));
        }));
    }

    /// While the route type is `coordinates`, any change to the mode or a
    /// coordinate recomputes the distance from the two points. In manual
    /// mode the distance is left untouched.
    fn install_distance_rule(&self) {
        let distance = Rc::clone(&self.distance);
        let mut sources: Vec<Rc<dyn FormField>> =
            vec![Rc::clone(&self.route_type) as Rc<dyn FormField>];
        for field in self.start.iter().chain(self.dest.iter()) {
            sources.push(Rc::clone(field) as Rc<dyn FormField>);
        }

        bind(&sources, move |values| {
            if RouteMode::from_value(&values[0]) != RouteMode::Coordinates {
                return;
            }
            let start = [
                coerce_number(&values[1]),
                coerce_number(&values[2]),
                coerce_number(&values[3]),
            ];
            let dest = [
                coerce_number(&values[4]),
                coerce_number(&values[5]),
                coerce_number(&values[6]),
            ];
            distance.set_value(&format_number(euclidean_distance(start, dest)));
        });
    }
}

fn coordinate_fields(
    keys: &[&str; 3],
    controls: [Rc<dyn TextControl>; 3],
    store: &Rc<dyn KeyValueStore>,
) -> [Rc<TextField>; 3] {
    let [x, y, z] = controls;
    [
        Rc::new(TextField::new(keys[0], NUMERIC_DEFAULT, x, Rc::clone(store))),
        Rc::new(TextField::new(keys[1], NUMERIC_DEFAULT, y, Rc::clone(store))),
        Rc::new(TextField::new(keys[2], NUMERIC_DEFAULT, z, Rc::clone(store))),
    ]
}

fn coordinate_list(start: &[Rc<TextField>; 3], dest: &[Rc<TextField>; 3]) -> Vec<Rc<TextField>> {
    start.iter().chain(dest.iter()).cloned().collect()
}

fn apply_read_only(distance: &Rc<TextField>, coordinates: &[Rc<TextField>], mode: RouteMode) {
    let computed = mode == RouteMode::Coordinates;
    distance.set_read_only(computed);
    for field in coordinates {
        field.set_read_only(!computed);
    }
}
