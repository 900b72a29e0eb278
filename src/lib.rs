//! graph-walker: stack-driven graph traversal and tree reconstruction
//!
//! This crate provides a small engine for traversing and incrementally
//! (re)constructing tree/graph structures through an explicit activation
//! stack, decoupled from any concrete node representation. Consumers supply
//! either a way to enumerate a node's children or a sequence of
//! root-to-leaf paths; the engine notifies registered observers as nodes
//! become active and inactive.
//!
//! # Architecture
//!
//! Three components build on each other:
//!
//! - **[`Walker`]**: the stack engine. Translates `begin`/`end` calls into
//!   listener notifications while maintaining the path from the traversal
//!   root to the currently active node.
//! - **[`GraphIterator`]**: a lazy external iterator on top of a walker and
//!   a caller-supplied [`ChildSource`]. A [`Mode`] bitmask configures at
//!   which steps it pauses and yields control.
//! - **[`TreeBuilder`]**: rebuilds a tree from an unordered stream of
//!   paths by diffing each path against the walker's active stack and
//!   emitting the minimal close/open sequence.
//!
//! Observers implement [`WalkerListener`]; [`CompositeListener`] fans
//! events out to many observers and [`TraceListener`] renders them as
//! XML-like text.
//!
//! Everything is single-threaded and synchronous: listener callbacks run
//! inline with the triggering call, and a traversal owns its walker.
//!
//! # Example
//!
//! ```
//! use graph_walker::{GraphIterator, Mode};
//!
//! // X { a { a1, a2 }, b }, described by a next-child function.
//! let source = |parent: &&str, previous: Option<&&str>| -> Option<&'static str> {
//!     match (*parent, previous.copied()) {
//!         ("X", None) => Some("a"),
//!         ("X", Some("a")) => Some("b"),
//!         ("a", None) => Some("a1"),
//!         ("a", Some("a1")) => Some("a2"),
//!         _ => None,
//!     }
//! };
//!
//! let preorder: Vec<&str> = GraphIterator::with_mode("X", source, Mode::DEFAULT).collect();
//! assert_eq!(preorder, ["X", "a", "a1", "a2", "b"]);
//! ```

pub mod builder;
pub mod error;
pub mod listener;
pub mod mode;
pub mod source;
pub mod trace;
pub mod walker;

pub mod iter;

pub use builder::TreeBuilder;
pub use error::{GraphError, Result};
pub use iter::GraphIterator;
pub use listener::{shared, CompositeListener, NoopListener, SharedListener, WalkerListener};
pub use mode::Mode;
pub use source::{ChildSource, IteratorSource};
pub use trace::{TraceConfig, TraceListener};
pub use walker::Walker;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
