//! Point updates by path copying.
//!
//! `set` records the root-to-leaf path, then rebuilds it bottom-up. Each
//! rebuilt node takes the freshly built child on the side the path went
//! through and the old, shared subtree on the other side. Nothing reachable
//! from the source root is written to.

use std::sync::Arc;

use smallvec::SmallVec;

use super::node::Node;
use super::node::Side;

/// Path steps, kept inline for balanced trees of up to 2^32 elements.
pub(crate) type Trail<'a, T> = SmallVec<[(Side, &'a Arc<Node<T>>); 32]>;

/// Result of a path-copying update.
pub struct Copied<T> {
    /// Root of the new version.
    pub root: Arc<Node<T>>,
    /// Number of nodes allocated for the new version.
    pub allocated: usize,
}

/// Replace the element at `index`, returning a new root.
///
/// The caller checks `index < root.size()`. Allocates one node per level of
/// the path, and shares every other node with `root`.
pub fn set<T>(root: &Arc<Node<T>>, mut index: usize, value: T) -> Copied<T> {
    debug_assert!(index < root.size());

    // Each step stores the side we descended into and the sibling we did not.
    let mut path: Trail<'_, T> = SmallVec::new();
    let mut node = root;
    while let Node::Branch { left, right, .. } = node.as_ref() {
        let before = left.size();
        if index < before {
            path.push((Side::Left, right));
            node = left;
        } else {
            index -= before;
            path.push((Side::Right, left));
            node = right;
        }
    }

    let allocated = path.len() + 1;
    let mut fresh = Arc::new(Node::leaf(value));
    for (side, sibling) in path.into_iter().rev() {
        fresh = Arc::new(Node::join(side, fresh, Arc::clone(sibling)));
    }

    return Copied { root: fresh, allocated };
}
