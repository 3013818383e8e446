//! Fixed-size persistent arrays.

use std::fmt;

use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::tree;
use crate::tree::Iter;
use crate::version::VersionId;
use crate::version::VersionTable;
use crate::version::Versioned;

/// A persistent array: every `set` publishes a new version of the same size.
///
/// ```
/// use versioned::{PersistentArray, VersionId};
///
/// let mut array = PersistentArray::new([1, 2, 3, 4, 5]);
/// let v1 = array.set(VersionId(0), 2, 10).unwrap();
/// assert_eq!(array.get(VersionId(0), 2), Ok(&3));
/// assert_eq!(array.get(v1, 2), Ok(&10));
/// ```
pub struct PersistentArray<T> {
    table: VersionTable<T>,
}

impl<T> PersistentArray<T> {
    /// Build version 0 from `values`.
    pub fn new(values: impl IntoIterator<Item = T>) -> PersistentArray<T> {
        return PersistentArray {
            table: VersionTable::new(tree::build(values)),
        };
    }

    /// The element at `index` in `version`.
    pub fn get(&self, version: VersionId, index: usize) -> Result<&T> {
        return self.table.get(version, index);
    }

    /// Derive a new version from `version` with `index` replaced by `value`.
    pub fn set(&mut self, version: VersionId, index: usize, value: T) -> Result<VersionId> {
        return self.table.set(version, index, value);
    }

    pub fn get_size(&self, version: VersionId) -> Result<usize> {
        return self.table.size(version);
    }

    pub fn current_version(&self) -> VersionId {
        return self.table.current();
    }

    pub fn version_count(&self) -> usize {
        return self.table.len();
    }

    pub fn iter(&self, version: VersionId) -> Result<Iter<'_, T>> {
        return self.table.iter(version);
    }

    /// A detached read-only handle on `version`.
    pub fn snapshot(&self, version: VersionId) -> Result<Snapshot<T>> {
        let root = self.table.resolve(version)?;
        return Ok(Snapshot::new(version, root.clone()));
    }

    pub fn height(&self, version: VersionId) -> Result<usize> {
        return self.table.height(version);
    }

    /// Distinct tree nodes held across every version.
    pub fn shared_node_count(&self) -> usize {
        return self.table.shared_node_count();
    }

    pub(crate) fn into_table(self) -> VersionTable<T> {
        return self.table;
    }
}

impl<T: Clone> PersistentArray<T> {
    pub fn to_vec(&self, version: VersionId) -> Result<Vec<T>> {
        return Ok(self.iter(version)?.cloned().collect());
    }
}

impl<T> Versioned<T> for PersistentArray<T> {
    fn get(&self, version: VersionId, index: usize) -> Result<&T> {
        return PersistentArray::get(self, version, index);
    }

    fn set(&mut self, version: VersionId, index: usize, value: T) -> Result<VersionId> {
        return PersistentArray::set(self, version, index, value);
    }

    fn get_size(&self, version: VersionId) -> Result<usize> {
        return PersistentArray::get_size(self, version);
    }

    fn current_version(&self) -> VersionId {
        return PersistentArray::current_version(self);
    }

    fn version_count(&self) -> usize {
        return PersistentArray::version_count(self);
    }

    fn iter(&self, version: VersionId) -> Result<Iter<'_, T>> {
        return PersistentArray::iter(self, version);
    }
}

impl<T> Default for PersistentArray<T> {
    fn default() -> Self {
        return PersistentArray::new(Vec::new());
    }
}

impl<T> FromIterator<T> for PersistentArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return PersistentArray::new(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current_version();
        let mut list = f.debug_list();
        if let Ok(iter) = self.iter(current) {
            list.entries(iter);
        }
        return list.finish();
    }
}
