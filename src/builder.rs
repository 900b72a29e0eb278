//! Tree reconstruction from paths
//!
//! A [`TreeBuilder`] rebuilds a tree structure from individual root-to-leaf
//! paths, emitting the minimal begin/end sequence that transforms the
//! currently active path into the newly presented one. Shared prefixes are
//! left untouched; everything below the divergence point is closed and the
//! new tail is opened.
//!
//! ```
//! use graph_walker::{TraceConfig, TraceListener, TreeBuilder};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let trace = Rc::new(RefCell::new(TraceListener::with_config(TraceConfig {
//!     indent: false,
//!     nodes: true,
//!     transitions: false,
//! })));
//! let mut builder: TreeBuilder<&str> = TreeBuilder::new(trace.clone());
//!
//! builder.align(&["a", "b", "c"]);
//! builder.align(&["a", "x", "y"]);
//! builder.close();
//!
//! assert_eq!(trace.borrow().output(), "<a><b><c></c></b><x><y></y></x></a>");
//! ```
//!
//! The weighted variant ([`align_weighted`](TreeBuilder::align_weighted))
//! builds a tree from a flat sequence and a relative ordering alone, the way
//! heading levels induce a document outline.

use crate::listener::SharedListener;
use crate::walker::Walker;
use std::cmp::Ordering;

/// Reconstructs trees by aligning a walker's activation stack to paths.
pub struct TreeBuilder<T> {
    walker: Walker<T>,
}

impl<T: Clone + PartialEq + 'static> TreeBuilder<T> {
    /// Create a builder notifying the given listener about every node.
    pub fn new(listener: SharedListener<T>) -> Self {
        Self::from_walker(Walker::new(listener))
    }

    /// Build on an existing walker (its current stack becomes the baseline).
    pub fn from_walker(walker: Walker<T>) -> Self {
        Self { walker }
    }

    /// Align the active stack to `path` using value equality.
    ///
    /// The last path element is always closed and reopened when the whole
    /// path already matches a prefix of the stack: a path denotes a fresh
    /// "current leaf" activation even when nothing else changed. An empty
    /// path closes everything, like [`close`](Self::close).
    pub fn align(&mut self, path: &[T]) {
        self.align_with(path, |a, b| a == b);
    }

    /// [`align`](Self::align) with a caller-supplied equality predicate for
    /// path elements.
    pub fn align_with<F>(&mut self, path: &[T], eq: F)
    where
        F: Fn(&T, &T) -> bool,
    {
        let stack = self.walker.stack();
        let len = stack.len().min(path.len());
        let mut keep = 0;
        while keep < len && eq(&stack[keep], &path[keep]) {
            keep += 1;
        }
        if keep == path.len() {
            // The whole path matched: force the last element to be closed
            // and reopened so it terminates in a fresh activation.
            keep = keep.saturating_sub(1);
        }
        while self.walker.depth() > keep {
            self.walker.end();
        }
        for node in &path[keep..] {
            self.walker.begin(node.clone());
        }
    }

    /// Insert a single node by relative weight instead of by full path.
    ///
    /// Stack entries are closed from the top for as long as they do not
    /// outrank the incoming node (`compare(node, entry)` is not `Less`);
    /// the node is then opened as a child of whatever remains. Feeding a
    /// flat sequence of headings through this with a level comparison
    /// yields the document outline.
    pub fn align_weighted<F>(&mut self, node: T, compare: F)
    where
        F: Fn(&T, &T) -> Ordering,
    {
        loop {
            let close = match self.walker.current() {
                Some(top) => compare(&node, top) != Ordering::Less,
                None => false,
            };
            if !close {
                break;
            }
            self.walker.end();
        }
        self.walker.begin(node);
    }

    /// End every remaining active node, finalizing the build session.
    pub fn close(&mut self) {
        while !self.walker.is_finished() {
            self.walker.end();
        }
    }

    /// The underlying walker; its stack is the currently aligned path.
    pub fn walker(&self) -> &Walker<T> {
        &self.walker
    }
}
