//! Appends by extending the right spine.
//!
//! The walk follows right children while the right subtree is strictly
//! smaller than the left one. At the first node where that stops holding (or
//! at a leaf) the node is paired with the new leaf under a fresh branch, and
//! every ancestor on the spine is path-copied with its size grown by one.
//!
//! Stopping early keeps each right subtree no larger than its left sibling
//! once it has been grown, so the height grows by one each time the size
//! doubles.

use std::sync::Arc;

use smallvec::SmallVec;

use super::node::Node;
use super::node::Side;
use super::path::Copied;
use super::path::Trail;

/// Append `value` after the last element, returning a new root.
pub fn append<T>(root: &Arc<Node<T>>, value: T) -> Copied<T> {
    let leaf = Arc::new(Node::leaf(value));
    if root.is_empty() {
        return Copied { root: leaf, allocated: 1 };
    }

    let mut path: Trail<'_, T> = SmallVec::new();
    let mut node = root;
    while let Node::Branch { left, right, .. } = node.as_ref() {
        if right.size() >= left.size() {
            break;
        }
        path.push((Side::Right, left));
        node = right;
    }

    let allocated = path.len() + 2;
    let mut fresh = Arc::new(Node::branch(Arc::clone(node), leaf));
    for (side, sibling) in path.into_iter().rev() {
        fresh = Arc::new(Node::join(side, fresh, Arc::clone(sibling)));
    }

    return Copied { root: fresh, allocated };
}
