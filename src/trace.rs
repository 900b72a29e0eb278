//! XML-like event tracing
//!
//! [`TraceListener`] renders every begin/end (and optionally transition)
//! event into an internal buffer as XML-like tags, indented by activation
//! depth. It works with anything built on a [`Walker`](crate::Walker) and
//! doubles as the reference rendering used throughout this crate's tests:
//! a traversal of `a { b }` traces as `<a><b></b></a>`.

use crate::listener::WalkerListener;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What a [`TraceListener`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Indent each line by two spaces per activation depth and terminate
    /// it with a newline.
    pub indent: bool,
    /// Render `<node>`/`</node>` tags for begin/end events.
    pub nodes: bool,
    /// Render `<transition parent=.. from=.. to=.. />` tags.
    pub transitions: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            indent: true,
            nodes: true,
            transitions: false,
        }
    }
}

/// Listener rendering traversal events as XML-like text.
#[derive(Debug, Default)]
pub struct TraceListener {
    buf: String,
    depth: usize,
    config: TraceConfig,
}

impl TraceListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TraceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Everything traced so far.
    pub fn output(&self) -> &str {
        &self.buf
    }

    /// Drain and return the trace buffer.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }

    /// Append a caller-supplied line at the current depth. Lets the loop
    /// driving a traversal interleave its own markers with the event trace.
    pub fn write_line(&mut self, line: &str) {
        if self.config.indent {
            for _ in 0..self.depth {
                self.buf.push_str("  ");
            }
        }
        self.buf.push_str(line);
        if self.config.indent {
            self.buf.push('\n');
        }
    }

    fn label<T: Display>(node: Option<&T>) -> String {
        node.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
    }
}

impl<T: Display> WalkerListener<T> for TraceListener {
    fn on_begin(&mut self, _parent: Option<&T>, node: &T) {
        if self.config.nodes {
            self.write_line(&format!("<{}>", node));
        }
        self.depth += 1;
    }

    fn on_end(&mut self, _parent: Option<&T>, node: &T) {
        // A tracer attached mid-traversal can see more ends than begins.
        self.depth = self.depth.saturating_sub(1);
        if self.config.nodes {
            self.write_line(&format!("</{}>", node));
        }
    }

    fn on_transition(&mut self, parent: &T, prev: Option<&T>, next: Option<&T>) {
        if self.config.transitions {
            self.write_line(&format!(
                "<transition parent='{}' from='{}' to='{}' />",
                parent,
                Self::label(prev),
                Self::label(next)
            ));
        }
    }
}
