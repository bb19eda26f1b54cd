use super::types::AuthChangeEvent;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type AuthListener = Rc<dyn Fn(AuthChangeEvent)>;

type ListenerList = RefCell<Vec<(usize, AuthListener)>>;

/// Registry of auth-state listeners shared by clones of a client.
#[derive(Clone, Default)]
pub struct AuthEvents {
    listeners: Rc<ListenerList>,
    next_id: Rc<Cell<usize>>,
}

impl AuthEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: AuthListener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    pub fn emit(&self, event: AuthChangeEvent) {
        // Listeners may subscribe or unsubscribe while being notified.
        let snapshot: Vec<AuthListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        log::debug!("auth event {}", event.as_str());
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

pub struct Subscription {
    id: usize,
    listeners: Weak<ListenerList>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
