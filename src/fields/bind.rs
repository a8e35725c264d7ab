//! Reactive binding over several source fields.

#[cfg(test)]
#[path = "bind_test.rs"]
mod bind_test;

use std::rc::Rc;

use super::FormField;

/// Call `callback` with the current values of all `sources`, in order,
/// whenever any one of them changes through user interaction.
///
/// Registration only; there is no initial invocation. Each change is a
/// discrete event; no debouncing and no ordering guarantee between sources
/// changing in close succession.
pub fn bind<F>(sources: &[Rc<dyn FormField>], callback: F)
where
    F: Fn(&[String]) + 'static,
{
    let callback = Rc::new(callback);
    for source in sources {
        let sources: Vec<Rc<dyn FormField>> = sources.to_vec();
        let callback = Rc::clone(&callback);
        source.add_change_listener(Rc::new(move |_| {
            let values: Vec<String> = sources.iter().map(|s| s.value()).collect();
            callback(&values);
        }));
    }
}
