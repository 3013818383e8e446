//! Detached, read-only handles to a single version.

use std::fmt;
use std::sync::Arc;

use crate::tree;
use crate::tree::Iter;
use crate::tree::Node;
use crate::version::VersionId;

/// A cheap handle on one version's tree.
///
/// Holds its own reference to the root, so it stays readable independently of
/// the table it came from and can be moved to another thread when `T` allows.
pub struct Snapshot<T> {
    version: VersionId,
    root: Arc<Node<T>>,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(version: VersionId, root: Arc<Node<T>>) -> Snapshot<T> {
        return Snapshot { version, root };
    }

    /// The version this snapshot was taken from.
    pub fn version(&self) -> VersionId {
        return self.version;
    }

    pub fn len(&self) -> usize {
        return self.root.size();
    }

    pub fn is_empty(&self) -> bool {
        return self.root.size() == 0;
    }

    /// The element at `index`, if it is in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        return tree::get(&self.root, index);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        return Iter::new(&self.root);
    }

    pub fn height(&self) -> usize {
        return tree::height(&self.root);
    }

    /// True if both snapshots point at the same root node.
    pub fn same_root(&self, other: &Snapshot<T>) -> bool {
        return Arc::ptr_eq(&self.root, &other.root);
    }
}

impl<T: Clone> Snapshot<T> {
    pub fn to_vec(&self) -> Vec<T> {
        return self.iter().cloned().collect();
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Snapshot<T> {
        return Snapshot {
            version: self.version,
            root: Arc::clone(&self.root),
        };
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("Snapshot")
            .field("version", &self.version)
            .field("items", &DebugItems(self))
            .finish();
    }
}

struct DebugItems<'a, T>(&'a Snapshot<T>);

impl<T: fmt::Debug> fmt::Debug for DebugItems<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.0.iter()).finish();
    }
}
