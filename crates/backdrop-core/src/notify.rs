use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Handle returned by [`Notifier::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Minimal single-threaded observer list for value-change notifications.
pub struct Notifier<T> {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }
}

impl<T> Notifier<T> {
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn notify(&mut self, value: &T) {
        for (_, listener) in &mut self.listeners {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Shared state whose change listeners run after the state borrow is released.
///
/// Listeners may read the state (through [`Observed::state`] or any clone of
/// the handle) while they are being notified. Subscribing or unsubscribing
/// from inside a listener is not supported.
pub struct Observed<T, E> {
    state: Rc<RefCell<T>>,
    listeners: Rc<RefCell<Notifier<E>>>,
}

impl<T, E> Clone for Observed<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T, E> Observed<T, E> {
    pub fn new(state: T) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            listeners: Rc::new(RefCell::new(Notifier::default())),
        }
    }

    pub fn state(&self) -> Ref<'_, T> {
        self.state.borrow()
    }

    /// Mutate the state; when `f` reports a change, notify listeners after
    /// the mutable borrow has ended.
    pub fn update(&self, f: impl FnOnce(&mut T) -> Option<E>) -> Option<E> {
        let change = f(&mut self.state.borrow_mut());
        if let Some(e) = &change {
            self.listeners.borrow_mut().notify(e);
        }
        change
    }

    pub fn subscribe(&self, listener: impl FnMut(&E) + 'static) -> SubscriptionId {
        self.listeners.borrow_mut().subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.borrow_mut().unsubscribe(id)
    }
}
