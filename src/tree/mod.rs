//! Persistent binary trees with cached subtree sizes.
//!
//! The functions here operate on bare roots and know nothing about versions:
//!
//! - `build`: balanced construction from a flat sequence, O(n)
//! - `get`: positional lookup, O(log n)
//! - `set`: point update by path copying, O(log n) new nodes
//! - `append`: growth along the right spine, O(log n) new nodes
//!
//! Every function that produces a new root leaves its input untouched.

mod build;
mod grow;
mod index;
mod node;
mod path;

use std::sync::Arc;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

pub use build::build;
pub use grow::append;
pub use index::get;
pub use index::height;
pub use node::Node;
pub use node::Side;
pub use path::Copied;
pub use path::set;

/// In-order iterator over the leaves of a tree.
pub struct Iter<'a, T> {
    stack: SmallVec<[&'a Node<T>; 32]>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(root: &'a Node<T>) -> Iter<'a, T> {
        let mut stack = SmallVec::new();
        stack.push(root);
        return Iter { stack, remaining: root.size() };
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Node::Branch { left, right, .. } => {
                    self.stack.push(right.as_ref());
                    self.stack.push(left.as_ref());
                }
                Node::Empty => {}
            }
        }
        return None;
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Record every node reachable from `root` in `seen`, by address.
///
/// Subtrees already present are skipped, so visiting many versions that share
/// structure costs only the nodes they do not share. Returns how many new
/// nodes were recorded.
pub fn visit<T>(root: &Arc<Node<T>>, seen: &mut FxHashSet<*const Node<T>>) -> usize {
    let mut added = 0;
    let mut stack: SmallVec<[&Arc<Node<T>>; 32]> = SmallVec::new();
    stack.push(root);
    while let Some(node) = stack.pop() {
        if !seen.insert(Arc::as_ptr(node)) {
            continue;
        }
        added += 1;
        if let Some((left, right)) = node.children() {
            stack.push(right);
            stack.push(left);
        }
    }
    return added;
}

/// Number of distinct nodes in a single tree.
pub fn node_count<T>(root: &Arc<Node<T>>) -> usize {
    return visit(root, &mut FxHashSet::default());
}
