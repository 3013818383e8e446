//! Immutable, size-augmented binary tree nodes.
//!
//! A node is never mutated once it has been wrapped in an `Arc`. Every
//! "update" builds new nodes along a single path and points them at the
//! untouched subtrees of the previous version, so any number of versions can
//! alias the same node.

use std::sync::Arc;

/// Which child of a branch a path step went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A node in a persistent sequence tree.
///
/// Invariant: `size` of a branch is always `left.size() + right.size()`, and
/// neither child of a branch is `Empty`.
#[derive(Debug)]
pub enum Node<T> {
    /// The root of a sequence with no elements.
    Empty,
    /// A single element.
    Leaf(T),
    /// A split point with a cached count of the leaves below it.
    Branch {
        size: usize,
        left: Arc<Node<T>>,
        right: Arc<Node<T>>,
    },
}

impl<T> Node<T> {
    /// Create a leaf holding `value`.
    pub fn leaf(value: T) -> Node<T> {
        tracing::trace!("leaf created");
        return Node::Leaf(value);
    }

    /// Create a branch over two existing subtrees, computing its size.
    pub fn branch(left: Arc<Node<T>>, right: Arc<Node<T>>) -> Node<T> {
        debug_assert!(!left.is_empty() && !right.is_empty());
        let size = left.size() + right.size();
        tracing::trace!(size, "branch created");
        return Node::Branch { size, left, right };
    }

    /// Rebuild a branch with one child replaced and the other shared.
    ///
    /// This is one step of path copying: `fresh` is the newly built node on
    /// the path and `sibling` is the untouched subtree of the old version.
    pub fn join(side: Side, fresh: Arc<Node<T>>, sibling: Arc<Node<T>>) -> Node<T> {
        return match side {
            Side::Left => Node::branch(fresh, sibling),
            Side::Right => Node::branch(sibling, fresh),
        };
    }

    /// Number of leaves in this subtree.
    #[inline(always)]
    pub fn size(&self) -> usize {
        return match self {
            Node::Empty => 0,
            Node::Leaf(_) => 1,
            Node::Branch { size, .. } => *size,
        };
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        return matches!(self, Node::Leaf(_));
    }

    /// True only for the empty-sequence sentinel.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return matches!(self, Node::Empty);
    }

    /// The element stored in a leaf.
    pub fn value(&self) -> Option<&T> {
        return match self {
            Node::Leaf(value) => Some(value),
            _ => None,
        };
    }

    /// The `(left, right)` children of a branch.
    pub fn children(&self) -> Option<(&Arc<Node<T>>, &Arc<Node<T>>)> {
        return match self {
            Node::Branch { left, right, .. } => Some((left, right)),
            _ => None,
        };
    }
}

impl<T: Clone> Node<T> {
    /// Shallow copy: the value is cloned, children are shared with `self`.
    pub fn copy(&self) -> Node<T> {
        return match self {
            Node::Empty => Node::Empty,
            Node::Leaf(value) => Node::Leaf(value.clone()),
            Node::Branch { size, left, right } => Node::Branch {
                size: *size,
                left: Arc::clone(left),
                right: Arc::clone(right),
            },
        };
    }
}
