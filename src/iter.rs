//! Lazy graph iteration
//!
//! A [`GraphIterator`] drives a [`Walker`] over an arbitrary structure, one
//! step at a time, pausing whenever the current step matches the configured
//! [`Mode`]. The structure itself is never touched directly: each step asks
//! the caller's [`ChildSource`] for the next child of the current stack top,
//! so the same engine iterates arrays, linked nodes or filesystem trees.
//!
//! The traversal is a single forward pass with no buffering or caching; the
//! activation stack inside the walker is the only traversal state, so depth
//! is bounded only by tree depth and the iteration can be paused at any
//! yield point and resumed later.

use crate::error::{GraphError, Result};
use crate::listener::SharedListener;
use crate::mode::Mode;
use crate::source::ChildSource;
use crate::walker::Walker;

/// External iterator over a graph, with configurable suspension points.
pub struct GraphIterator<T, S> {
    walker: Walker<T>,
    source: S,
    /// The node the next walker update will activate, if any.
    pending: Option<T>,
    /// Classification of the most recent step: one of the four single-flag
    /// [`Mode`] values once iteration has started.
    status: Mode,
    mode: Mode,
    /// True while the current node has been peeked at but not yet consumed.
    primed: bool,
}

impl<T: 'static, S: ChildSource<T>> GraphIterator<T, S> {
    /// Iterate from `root` in the default (pre-order) mode.
    pub fn new(root: T, source: S) -> Self {
        Self::with_mode(root, source, Mode::DEFAULT)
    }

    /// Iterate from `root`, pausing at the steps selected by `mode`.
    pub fn with_mode(root: T, source: S, mode: Mode) -> Self {
        let mut iter = Self::from_walker(Walker::unobserved(), source, mode);
        iter.begin(root);
        iter
    }

    /// Iterate from `root` with a listener observing every begin/end.
    pub fn with_listener(root: T, source: S, listener: SharedListener<T>, mode: Mode) -> Self {
        let mut iter = Self::from_walker(Walker::new(listener), source, mode);
        iter.begin(root);
        iter
    }

    /// Build an iterator over an existing walker. No root is seeded; call
    /// [`begin`](Self::begin) before iterating.
    pub fn from_walker(walker: Walker<T>, source: S, mode: Mode) -> Self {
        Self {
            walker,
            source,
            pending: None,
            status: Mode::NONE,
            mode,
            primed: false,
        }
    }

    /// Seed the node the next step will activate.
    pub fn begin(&mut self, root: T) {
        self.pending = Some(root);
    }

    /// True if another yield point remains. Idempotent: the value it finds
    /// is not consumed until [`next`](Iterator::next) is called.
    pub fn has_next(&mut self) -> bool {
        self.shift(true).is_some()
    }

    /// The node the next [`next`](Iterator::next) call will yield, without
    /// consuming it.
    pub fn peek(&mut self) -> Option<&T> {
        self.shift(true)
    }

    /// Removal is not part of the traversal model; this always fails with
    /// [`GraphError::RemoveUnsupported`] and never mutates state.
    pub fn remove(&mut self) -> Result<()> {
        Err(GraphError::RemoveUnsupported)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Classification of the step the iterator is currently paused at.
    pub fn status(&self) -> Mode {
        self.status
    }

    /// The node most recently deactivated by the underlying walker.
    pub fn previous(&self) -> Option<&T> {
        self.walker.previous()
    }

    pub fn walker(&self) -> &Walker<T> {
        &self.walker
    }

    /// Advance the walker until a step matches the mode (pausing there) or
    /// the traversal finishes, then report the current stack top. `primed`
    /// records whether the reported node still counts as unconsumed.
    fn shift(&mut self, primed: bool) -> Option<&T> {
        if !self.primed {
            while self.walker.update(self.pending.take()) {
                if self.walker.current().is_none() {
                    // The root was just closed; nothing is left to visit.
                    break;
                }
                self.classify_step();
                if self.status.intersects(self.mode) {
                    break;
                }
            }
        }
        self.primed = primed;
        self.walker.current()
    }

    /// Ask the source for the next candidate and classify the step the
    /// walker just performed.
    fn classify_step(&mut self) {
        let exited = self.walker.has_exited();
        let next = match self.walker.current() {
            Some(parent) => self.source.next_child(parent, self.walker.previous()),
            None => None,
        };
        self.status = match (exited, next.is_some()) {
            (false, true) => Mode::ENTER,
            (false, false) => Mode::LEAF,
            (true, true) => Mode::SIBLING_STEP,
            (true, false) => Mode::EXIT,
        };
        self.pending = next;
    }
}

impl<T: Clone + 'static, S: ChildSource<T>> Iterator for GraphIterator<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.shift(false).cloned()
    }
}
