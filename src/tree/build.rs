//! Balanced construction from a flat sequence.

use std::ops::Range;
use std::sync::Arc;

use super::node::Node;

/// Build a balanced tree whose in-order leaves are `values`.
///
/// Each range is split at its midpoint, so the height is
/// `ceil(log2(n)) + 1` and construction is O(n). An empty input yields the
/// `Empty` sentinel.
pub fn build<T>(values: impl IntoIterator<Item = T>) -> Arc<Node<T>> {
    let values: Vec<T> = values.into_iter().collect();
    let len = values.len();
    let mut iter = values.into_iter();
    return build_range(&mut iter, 0..len).unwrap_or_else(|| Arc::new(Node::Empty));
}

fn build_range<T>(iter: &mut impl Iterator<Item = T>, range: Range<usize>) -> Option<Arc<Node<T>>> {
    if range.is_empty() {
        return None;
    }
    if range.start + 1 == range.end {
        return Some(Arc::new(Node::leaf(iter.next()?)));
    }
    let mid = range.start + (range.end - range.start) / 2;
    let left = build_range(iter, range.start..mid)?;
    let right = build_range(iter, mid..range.end)?;
    return Some(Arc::new(Node::branch(left, right)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::height;
    use crate::tree::Iter;

    fn leaves<T: Clone>(root: &Node<T>) -> Vec<T> {
        return Iter::new(root).cloned().collect();
    }

    #[test]
    fn empty_input_builds_sentinel() {
        let root = build(Vec::<u8>::new());
        assert!(root.is_empty());
        assert_eq!(root.size(), 0);
    }

    #[test]
    fn single_value_builds_leaf() {
        let root = build([42]);
        assert!(root.is_leaf());
        assert_eq!(root.value(), Some(&42));
    }

    #[test]
    fn preserves_order() {
        let values: Vec<u32> = (0..37).collect();
        let root = build(values.clone());
        assert_eq!(root.size(), 37);
        assert_eq!(leaves(&root), values);
    }

    #[test]
    fn splits_at_midpoint() {
        // [lo, hi) = [0, 5) splits into [0, 2) and [2, 5).
        let root = build([1, 2, 3, 4, 5]);
        let (left, right) = root.children().expect("branch");
        assert_eq!(left.size(), 2);
        assert_eq!(right.size(), 3);
    }

    #[test]
    fn height_is_logarithmic() {
        for n in [1usize, 2, 3, 4, 5, 8, 9, 100, 1024, 1025] {
            let root = build(0..n);
            let bound = (usize::BITS - (n - 1).leading_zeros()) as usize + 1;
            assert!(height(&root) <= bound, "n = {}", n);
        }
    }
}
