use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::fields::stubs::StubTextControl;
use crate::fields::{FormField, TextControl, TextField};
use crate::storage::{KeyValueStore, MemoryStore};

struct Source {
    control: Rc<StubTextControl>,
    field: Rc<TextField>,
}

fn source(name: &str, store: &Rc<dyn KeyValueStore>) -> Source {
    let control = Rc::new(StubTextControl::new());
    let field = Rc::new(TextField::new(
        name,
        "0",
        Rc::clone(&control) as Rc<dyn TextControl>,
        Rc::clone(store),
    ));
    Source { control, field }
}

fn edit(source: &Source, text: &str) {
    source.control.type_text(text);
    source.field.commit_edit();
}

#[test]
fn bind_does_not_invoke_at_registration() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let a = source("a", &store);
    let calls = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&calls);

    bind(&[a.field.clone() as Rc<dyn FormField>], move |_| {
        *sink.borrow_mut() += 1;
    });

    assert_eq!(*calls.borrow(), 0);
}

#[test]
fn any_source_change_calls_back_with_all_current_values_in_order() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let a = source("a", &store);
    let b = source("b", &store);
    let c = source("c", &store);
    let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    bind(
        &[
            a.field.clone() as Rc<dyn FormField>,
            b.field.clone() as Rc<dyn FormField>,
            c.field.clone() as Rc<dyn FormField>,
        ],
        move |values| sink.borrow_mut().push(values.to_vec()),
    );

    edit(&b, "5");

    assert_eq!(*seen.borrow(), vec![vec!["0".to_owned(), "5".to_owned(), "0".to_owned()]]);
}

#[test]
fn later_changes_see_earlier_ones() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let a = source("a", &store);
    let b = source("b", &store);
    let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    bind(
        &[
            a.field.clone() as Rc<dyn FormField>,
            b.field.clone() as Rc<dyn FormField>,
        ],
        move |values| sink.borrow_mut().push(values.to_vec()),
    );

    edit(&a, "1");
    edit(&b, "2");

    assert_eq!(
        *seen.borrow(),
        vec![
            vec!["1".to_owned(), "0".to_owned()],
            vec!["1".to_owned(), "2".to_owned()],
        ]
    );
}

#[test]
fn each_source_triggers_the_same_callback() {
    let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let a = source("a", &store);
    let b = source("b", &store);
    let calls = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&calls);

    bind(
        &[
            a.field.clone() as Rc<dyn FormField>,
            b.field.clone() as Rc<dyn FormField>,
        ],
        move |_| *sink.borrow_mut() += 1,
    );

    edit(&a, "1");
    edit(&a, "2");
    edit(&b, "3");

    assert_eq!(*calls.borrow(), 3);
}
