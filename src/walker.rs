//! The activation stack engine
//!
//! A [`Walker`] translates simple [`begin`](Walker::begin)/[`end`](Walker::end)
//! calls into listener notifications while maintaining the activation stack:
//! the path from the traversal root to the currently active node. This very
//! basic mechanism is what [`GraphIterator`](crate::GraphIterator) and
//! [`TreeBuilder`](crate::TreeBuilder) are built on.
//!
//! The stack and the previous-node slot are the walker's only mutable state.
//! Listener callbacks run synchronously, inline with the triggering call;
//! because driving a walker requires `&mut self`, a listener can never
//! re-enter the walker it is observing.

use crate::listener::{shared, NoopListener, SharedListener};
use std::fmt;

/// Stack engine dispatching begin/end/transition events to a listener.
pub struct Walker<T> {
    stack: Vec<T>,
    previous: Option<T>,
    listener: SharedListener<T>,
}

impl<T: 'static> Walker<T> {
    /// Create a walker notifying the given listener.
    pub fn new(listener: SharedListener<T>) -> Self {
        Self {
            stack: Vec::new(),
            previous: None,
            listener,
        }
    }

    /// Create a walker with no observer attached.
    pub fn unobserved() -> Self {
        Self::new(shared(NoopListener))
    }
}

impl<T> Walker<T> {
    /// The single primitive operation.
    ///
    /// With `Some(node)`: fires a transition (if the stack is non-empty),
    /// clears the previous-node slot, fires `on_begin` and pushes the node.
    /// With `None`: fires a transition (if the stack is non-empty), pops the
    /// top into the previous-node slot and fires `on_end`. Returns `false`
    /// only for `None` on an empty stack, where there is nothing to end.
    pub fn update(&mut self, node: Option<T>) -> bool {
        if node.is_none() && self.stack.is_empty() {
            return false;
        }
        let listener = self.listener.clone();
        if let Some(top) = self.stack.last() {
            listener
                .borrow_mut()
                .on_transition(top, self.previous.as_ref(), node.as_ref());
        }
        match node {
            Some(node) => {
                self.previous = None;
                listener.borrow_mut().on_begin(self.stack.last(), &node);
                self.stack.push(node);
            }
            None => {
                if let Some(popped) = self.stack.pop() {
                    listener.borrow_mut().on_end(self.stack.last(), &popped);
                    self.previous = Some(popped);
                }
            }
        }
        true
    }

    /// Activate a node: push it onto the stack.
    pub fn begin(&mut self, node: T) -> bool {
        self.update(Some(node))
    }

    /// Deactivate the current node: pop the stack top.
    pub fn end(&mut self) -> bool {
        self.update(None)
    }

    /// Activate a node and deactivate it immediately. Models a node with
    /// zero children: it still produces its begin/end pair.
    pub fn leaf(&mut self, node: T) -> bool {
        self.update(Some(node));
        self.update(None)
    }

    /// The currently active node (stack top), if any.
    pub fn current(&self) -> Option<&T> {
        self.stack.last()
    }

    /// The node deactivated by the last operation, or `None` if the last
    /// operation was an activation (or no operation has occurred).
    pub fn previous(&self) -> Option<&T> {
        self.previous.as_ref()
    }

    /// The activation stack, root-first.
    pub fn stack(&self) -> &[T] {
        &self.stack
    }

    /// Number of currently active nodes.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True once every opened node has been closed.
    pub fn is_finished(&self) -> bool {
        self.stack.is_empty()
    }

    /// True if the last operation activated a node.
    pub fn has_entered(&self) -> bool {
        self.previous.is_none() && !self.stack.is_empty()
    }

    /// True if the last operation deactivated a node.
    pub fn has_exited(&self) -> bool {
        self.previous.is_some()
    }

    /// Shared handle to the attached listener.
    pub fn listener(&self) -> SharedListener<T> {
        self.listener.clone()
    }

    /// Replace the attached listener.
    pub fn set_listener(&mut self, listener: SharedListener<T>) {
        self.listener = listener;
    }
}

impl<T: fmt::Debug> fmt::Debug for Walker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("stack", &self.stack)
            .field("previous", &self.previous)
            .finish()
    }
}
