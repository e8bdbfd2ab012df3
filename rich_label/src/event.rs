// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

/// Identifies a listener registered with [`HrefClickEvent::add_listener`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&str)>;

/// Raised with the `href` of a hyperlink when it is clicked.
///
/// Listeners run synchronously, in the order they were added.
#[derive(Default)]
pub struct HrefClickEvent {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl HrefClickEvent {
    /// Create an event with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` and return an id to remove it with.
    pub fn add_listener(&mut self, listener: impl FnMut(&str) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let len = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != len
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Call every listener with `href`.
    pub fn invoke(&mut self, href: &str) {
        for (_, listener) in &mut self.listeners {
            listener(href);
        }
    }
}

impl fmt::Debug for HrefClickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HrefClickEvent")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::HrefClickEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut event = HrefClickEvent::new();
        for tag in ["first", "second"] {
            let seen = seen.clone();
            event.add_listener(move |href| seen.borrow_mut().push(format!("{tag}:{href}")));
        }
        event.invoke("x");
        assert_eq!(*seen.borrow(), ["first:x", "second:x"]);
    }

    #[test]
    fn removed_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let mut event = HrefClickEvent::new();
        let id = {
            let calls = calls.clone();
            event.add_listener(move |_| *calls.borrow_mut() += 1)
        };
        event.invoke("a");
        assert!(event.remove_listener(id));
        assert!(!event.remove_listener(id));
        assert!(event.is_empty());
        event.invoke("b");
        assert_eq!(*calls.borrow(), 1);
    }
}
