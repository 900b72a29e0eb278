//! Step-by-step event ordering tests for the Walker
//!
//! Each walker update is checked against the exact trace it must produce,
//! including the transition fired immediately before every begin/end.

use graph_walker::{TraceConfig, TraceListener, Walker};
use std::cell::RefCell;
use std::rc::Rc;

struct Fixture {
    walker: Walker<&'static str>,
    trace: Rc<RefCell<TraceListener>>,
}

impl Fixture {
    fn new() -> Self {
        let trace = Rc::new(RefCell::new(TraceListener::with_config(TraceConfig {
            indent: false,
            nodes: true,
            transitions: true,
        })));
        Self {
            walker: Walker::new(trace.clone()),
            trace,
        }
    }

    fn step(&mut self, node: Option<&'static str>, expected: &str) {
        self.walker.update(node);
        assert_eq!(self.trace.borrow_mut().take_output(), expected);
    }

    fn begin(&mut self, node: &'static str, expected: &str) {
        self.step(Some(node), expected);
    }

    fn end(&mut self, expected: &str) {
        self.step(None, expected);
    }

    fn leaf(&mut self, node: &'static str, expected_in: &str, expected_out: &str) {
        self.step(Some(node), expected_in);
        self.step(None, expected_out);
    }
}

#[test]
fn test_every_update_produces_the_expected_events() {
    let mut f = Fixture::new();
    f.begin("a", "<a>");
    {
        f.leaf(
            "a1",
            "<transition parent='a' from='-' to='a1' /><a1>",
            "<transition parent='a1' from='-' to='-' /></a1>",
        );
        f.leaf(
            "a2",
            "<transition parent='a' from='a1' to='a2' /><a2>",
            "<transition parent='a2' from='-' to='-' /></a2>",
        );
        f.begin("a3", "<transition parent='a' from='a2' to='a3' /><a3>");
        {
            f.leaf(
                "a3.1",
                "<transition parent='a3' from='-' to='a3.1' /><a3.1>",
                "<transition parent='a3.1' from='-' to='-' /></a3.1>",
            );
            f.leaf(
                "a3.2",
                "<transition parent='a3' from='a3.1' to='a3.2' /><a3.2>",
                "<transition parent='a3.2' from='-' to='-' /></a3.2>",
            );
            f.leaf(
                "a3.3",
                "<transition parent='a3' from='a3.2' to='a3.3' /><a3.3>",
                "<transition parent='a3.3' from='-' to='-' /></a3.3>",
            );
        }
        f.end("<transition parent='a3' from='a3.3' to='-' /></a3>");
    }
    f.end("<transition parent='a' from='a3' to='-' /></a>");
    assert!(f.walker.is_finished());
}

#[test]
fn test_end_on_empty_stack_produces_nothing() {
    let mut f = Fixture::new();
    f.end("");
    assert!(!f.walker.update(None));
}

#[test]
fn test_root_level_siblings_have_no_transition() {
    let mut f = Fixture::new();
    // With an empty stack there is no parent to report a transition for,
    // even though the walker remembers the previously deactivated node.
    f.leaf("a", "<a>", "<transition parent='a' from='-' to='-' /></a>");
    f.begin("b", "<b>");
    assert_eq!(f.walker.previous(), None);
}
