//! Listener contract
//!
//! A [`WalkerListener`] observes the activation stack of a
//! [`Walker`](crate::Walker): it is told when a node becomes active
//! (`on_begin`), when it becomes inactive (`on_end`) and when control
//! transfers between nodes (`on_transition`). Listeners are purely
//! observational; they never drive the walker they are attached to.
//!
//! Listeners are shared by reference ([`SharedListener`]) so that the code
//! driving a traversal and the code inspecting its results can hold the
//! same observer.

use std::cell::RefCell;
use std::rc::Rc;

/// Capability interface for traversal observers.
///
/// All methods default to no-ops so an observer only implements the events
/// it cares about.
pub trait WalkerListener<T> {
    /// Called exactly once when `node` is pushed onto the activation stack.
    /// `parent` is the node directly below it, or `None` for the root.
    /// `node` is not yet on the stack when this fires.
    fn on_begin(&mut self, parent: Option<&T>, node: &T) {
        let _ = (parent, node);
    }

    /// Called exactly once when `node` is popped from the activation stack.
    /// `node` is already off the stack when this fires; `parent` is the new
    /// stack top, or `None` if the stack became empty.
    fn on_end(&mut self, parent: Option<&T>, node: &T) {
        let _ = (parent, node);
    }

    /// Called immediately before every begin or end while the stack is
    /// non-empty. `parent` is the current stack top; `prev` is the node just
    /// deactivated (`None` if the previous operation was an activation);
    /// `next` is the node about to be activated (`None` for a deactivation).
    ///
    /// This is the only event that lets an observer distinguish a
    /// sibling-to-sibling move from a plain enter or exit.
    fn on_transition(&mut self, parent: &T, prev: Option<&T>, next: Option<&T>) {
        let _ = (parent, prev, next);
    }
}

/// Shared handle to a traversal observer.
pub type SharedListener<T> = Rc<RefCell<dyn WalkerListener<T>>>;

/// Wrap a listener into a [`SharedListener`] handle.
pub fn shared<T, L>(listener: L) -> SharedListener<T>
where
    L: WalkerListener<T> + 'static,
{
    Rc::new(RefCell::new(listener))
}

/// Stateless observer used when no listener is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<T> WalkerListener<T> for NoopListener {}

/// Fan-out observer dispatching every event to an ordered set of listeners.
///
/// Dispatch iterates a snapshot of the registration list, so adding or
/// removing a listener during an in-flight dispatch never affects the
/// listener set used for that dispatch. Clones of a `CompositeListener`
/// share the same registration list, which is how a listener deep in the
/// fan-out can hold a handle for later add/remove calls.
pub struct CompositeListener<T> {
    listeners: Rc<RefCell<Vec<SharedListener<T>>>>,
}

impl<T> CompositeListener<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Append a listener; it will be notified after all earlier registrations.
    pub fn add_listener(&self, listener: SharedListener<T>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Remove a previously registered listener, identified by handle
    /// identity. Unknown handles are ignored.
    pub fn remove_listener(&self, listener: &SharedListener<T>) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    fn snapshot(&self) -> Vec<SharedListener<T>> {
        self.listeners.borrow().clone()
    }
}

impl<T> Clone for CompositeListener<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T> Default for CompositeListener<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WalkerListener<T> for CompositeListener<T> {
    fn on_begin(&mut self, parent: Option<&T>, node: &T) {
        for listener in self.snapshot() {
            listener.borrow_mut().on_begin(parent, node);
        }
    }

    fn on_end(&mut self, parent: Option<&T>, node: &T) {
        for listener in self.snapshot() {
            listener.borrow_mut().on_end(parent, node);
        }
    }

    fn on_transition(&mut self, parent: &T, prev: Option<&T>, next: Option<&T>) {
        for listener in self.snapshot() {
            listener.borrow_mut().on_transition(parent, prev, next);
        }
    }
}
