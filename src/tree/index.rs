//! Positional lookup by cached subtree sizes.

use super::node::Node;

/// Find the element at in-order position `index`.
///
/// Returns `None` when `index >= root.size()`, before descending.
pub fn get<T>(root: &Node<T>, mut index: usize) -> Option<&T> {
    if index >= root.size() {
        return None;
    }

    let mut node = root;
    loop {
        match node {
            Node::Leaf(value) => return Some(value),
            Node::Branch { left, right, .. } => {
                let before = left.size();
                if index < before {
                    node = left.as_ref();
                } else {
                    index -= before;
                    node = right.as_ref();
                }
            }
            Node::Empty => return None,
        }
    }
}

/// Number of nodes on the longest root-to-leaf path. A leaf has height 1,
/// the empty sentinel 0.
pub fn height<T>(root: &Node<T>) -> usize {
    return match root {
        Node::Empty => 0,
        Node::Leaf(_) => 1,
        Node::Branch { left, right, .. } => 1 + height(left).max(height(right)),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build;

    #[test]
    fn finds_every_position() {
        let root = build(100..150);
        for i in 0..50 {
            assert_eq!(get(&root, i), Some(&(100 + i)));
        }
    }

    #[test]
    fn out_of_range_is_none() {
        let root = build([1, 2, 3]);
        assert_eq!(get(&root, 3), None);
        assert_eq!(get(&root, usize::MAX), None);
    }

    #[test]
    fn empty_has_nothing() {
        let root = build(Vec::<i32>::new());
        assert_eq!(get(&root, 0), None);
        assert_eq!(height(&root), 0);
    }

    #[test]
    fn height_of_small_trees() {
        assert_eq!(height(&build([1])), 1);
        assert_eq!(height(&build([1, 2])), 2);
        assert_eq!(height(&build([1, 2, 3, 4])), 3);
        assert_eq!(height(&build([1, 2, 3, 4, 5])), 4);
    }
}
