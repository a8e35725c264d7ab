use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::fields::stubs::StubChoiceControl;
use crate::fields::FormField;
use crate::storage::{KeyValueStore, MemoryStore};

fn memory_store() -> Rc<dyn KeyValueStore> {
    Rc::new(MemoryStore::new())
}

fn route_type_field(
    store: &Rc<dyn KeyValueStore>,
) -> (Rc<StubChoiceControl>, ChoiceField) {
    let control = Rc::new(StubChoiceControl::new(&["coordinates", "manual"]));
    let field = ChoiceField::new(
        "routeType",
        "coordinates",
        Rc::clone(&control) as Rc<dyn ChoiceControl>,
        Rc::clone(store),
    );
    (control, field)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn construction_selects_control_matching_default() {
    let store = memory_store();
    let (control, field) = route_type_field(&store);
    assert_eq!(field.value(), "coordinates");
    assert_eq!(control.selected(), Some("coordinates".to_owned()));
}

#[test]
fn construction_selects_control_matching_stored_value() {
    let store = memory_store();
    store.set("routeType", "manual");
    let (control, field) = route_type_field(&store);
    assert_eq!(field.value(), "manual");
    assert_eq!(control.selected(), Some("manual".to_owned()));
}

#[test]
fn stored_value_without_matching_control_changes_no_selection() {
    let store = memory_store();
    store.set("routeType", "teleport");
    let (control, field) = route_type_field(&store);
    assert_eq!(field.value(), "teleport");
    assert_eq!(control.selected(), None);
}

// =============================================================
// User selection (commit_selection)
// =============================================================

#[test]
fn commit_selection_persists_and_notifies() {
    let store = memory_store();
    let (_, field) = route_type_field(&store);
    let seen: Rc<RefCell<Vec<(String, String)>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    field.add_change_listener(Rc::new(move |change| {
        sink.borrow_mut().push((change.old.clone(), change.new.clone()));
    }));

    field.commit_selection("manual");

    assert_eq!(field.value(), "manual");
    assert_eq!(store.get("routeType"), Some("manual".to_owned()));
    assert_eq!(
        *seen.borrow(),
        vec![("coordinates".to_owned(), "manual".to_owned())]
    );
}

// =============================================================
// Programmatic set_value
// =============================================================

#[test]
fn set_value_reselects_matching_control_without_notifying() {
    let store = memory_store();
    let (control, field) = route_type_field(&store);
    let fired = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&fired);
    field.add_change_listener(Rc::new(move |_| *sink.borrow_mut() += 1));

    field.set_value("manual");

    assert_eq!(control.selected(), Some("manual".to_owned()));
    assert_eq!(store.get("routeType"), Some("manual".to_owned()));
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn set_value_with_no_matching_control_keeps_previous_selection() {
    let store = memory_store();
    let (control, field) = route_type_field(&store);

    field.set_value("teleport");

    // The value is stored, but the on-screen selection stays where it was.
    assert_eq!(field.value(), "teleport");
    assert_eq!(store.get("routeType"), Some("teleport".to_owned()));
    assert_eq!(control.selected(), Some("coordinates".to_owned()));
}
