//! Child enumeration capabilities
//!
//! A [`ChildSource`] tells a [`GraphIterator`](crate::GraphIterator) how to
//! move from one child of a node to the next. It is the only thing a caller
//! has to provide to traverse an arbitrary structure: arrays, linked nodes,
//! filesystem entries, anything that can answer "given this parent and the
//! child we just left, what comes next?".
//!
//! Plain closures work directly. For structures that naturally hand out a
//! child *iterator* per node instead of a next-sibling function, wrap the
//! iterator factory in an [`IteratorSource`].

/// Strategy for enumerating the children of a node.
///
/// The contract mirrors repeated sibling lookups: `previous` is `None` when
/// `parent` was just entered (the answer is its first child) and `Some`
/// when a child was just left (the answer is that child's next sibling).
/// `None` as a result means there are no more children. An implementation
/// must stay consistent with being re-driven using its own previous return
/// value; beyond that it may keep whatever state it needs.
pub trait ChildSource<T> {
    fn next_child(&mut self, parent: &T, previous: Option<&T>) -> Option<T>;
}

impl<T, F> ChildSource<T> for F
where
    F: FnMut(&T, Option<&T>) -> Option<T>,
{
    fn next_child(&mut self, parent: &T, previous: Option<&T>) -> Option<T> {
        self(parent, previous)
    }
}

/// A [`ChildSource`] built from a per-node child-iterator factory.
///
/// The factory returns `Some(iterator)` for nodes that can have children
/// and `None` for nodes that cannot (a file, say, as opposed to an empty
/// directory). In-flight iterators live on an explicit stack whose depth is
/// bounded only by tree depth, keeping the traversal pausable and free of
/// call-stack recursion. Entering a node pushes its child iterator; leaving
/// one pops (and drops) it; the next child is always drawn from the topmost
/// live iterator.
pub struct IteratorSource<I, F> {
    stack: Vec<Option<I>>,
    factory: F,
}

impl<T, I, F> IteratorSource<I, F>
where
    I: Iterator<Item = T>,
    F: FnMut(&T) -> Option<I>,
{
    pub fn new(factory: F) -> Self {
        Self {
            stack: Vec::new(),
            factory,
        }
    }

    /// Number of in-flight child iterators (the traversal depth).
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn load_next(&mut self) -> Option<T> {
        self.stack.last_mut()?.as_mut()?.next()
    }
}

impl<T, I, F> ChildSource<T> for IteratorSource<I, F>
where
    I: Iterator<Item = T>,
    F: FnMut(&T) -> Option<I>,
{
    fn next_child(&mut self, parent: &T, previous: Option<&T>) -> Option<T> {
        if previous.is_none() {
            // `parent` was just entered: open its child iterator.
            self.stack.push((self.factory)(parent));
        } else {
            // A child was just left: its own iterator is done with.
            self.stack.pop();
        }
        self.load_next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_children(node: &&'static str) -> Option<std::vec::IntoIter<&'static str>> {
        let children: Vec<&'static str> = match *node {
            "X" => vec!["a", "b"],
            "a" => vec!["a1", "a2"],
            "b" => vec![],
            _ => return None,
        };
        Some(children.into_iter())
    }

    #[test]
    fn test_entering_a_node_yields_its_first_child() {
        let mut source = IteratorSource::new(tree_children);
        assert_eq!(source.next_child(&"X", None), Some("a"));
        assert_eq!(source.depth(), 1);
    }

    #[test]
    fn test_leaving_a_child_yields_its_next_sibling() {
        let mut source = IteratorSource::new(tree_children);
        source.next_child(&"X", None);
        // Enter "a", walk its children, then leave it.
        assert_eq!(source.next_child(&"a", None), Some("a1"));
        assert_eq!(source.next_child(&"a1", None), None);
        assert_eq!(source.next_child(&"a", Some(&"a1")), Some("a2"));
        assert_eq!(source.next_child(&"a2", None), None);
        assert_eq!(source.next_child(&"a", Some(&"a2")), None);
        assert_eq!(source.next_child(&"X", Some(&"a")), Some("b"));
    }

    #[test]
    fn test_factory_none_means_no_children() {
        let mut source = IteratorSource::new(tree_children);
        assert_eq!(source.next_child(&"a1", None), None);
        assert_eq!(source.depth(), 1);
    }

    #[test]
    fn test_closure_is_a_child_source() {
        let siblings = [1u32, 2, 3];
        let mut source = |_: &u32, previous: Option<&u32>| -> Option<u32> {
            match previous {
                None => siblings.first().copied(),
                Some(prev) => {
                    let at = siblings.iter().position(|s| s == prev)?;
                    siblings.get(at + 1).copied()
                }
            }
        };
        assert_eq!(source.next_child(&0, None), Some(1));
        assert_eq!(source.next_child(&0, Some(&1)), Some(2));
        assert_eq!(source.next_child(&0, Some(&3)), None);
    }
}
