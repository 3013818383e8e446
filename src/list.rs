//! Growable persistent lists.

use std::fmt;

use crate::array::PersistentArray;
use crate::error::Result;
use crate::snapshot::Snapshot;
use crate::tree;
use crate::tree::Iter;
use crate::version::VersionId;
use crate::version::VersionTable;
use crate::version::Versioned;

/// A persistent list: a persistent array that can also grow at the end.
///
/// ```
/// use versioned::{PersistentList, VersionId};
///
/// let mut list = PersistentList::new([10, 20, 30]);
/// let v1 = list.append(VersionId(0), 40).unwrap();
/// assert_eq!(list.get_size(VersionId(0)), Ok(3));
/// assert_eq!(list.get_size(v1), Ok(4));
/// assert_eq!(list.get(v1, 3), Ok(&40));
/// ```
pub struct PersistentList<T> {
    table: VersionTable<T>,
}

impl<T> PersistentList<T> {
    /// Build version 0 from `values`.
    pub fn new(values: impl IntoIterator<Item = T>) -> PersistentList<T> {
        return PersistentList {
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

    /// Derive a new version from `version` with `value` added at the end.
    ///
    /// Only fails if `version` does not exist.
    pub fn append(&mut self, version: VersionId, value: T) -> Result<VersionId> {
        return self.table.append(version, value);
    }

    /// Append to the current version.
    pub fn push(&mut self, value: T) -> VersionId {
        let current = self.table.current();
        // The current version always exists.
        return self.table.append(current, value).unwrap_or(current);
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
}

impl<T: Clone> PersistentList<T> {
    pub fn to_vec(&self, version: VersionId) -> Result<Vec<T>> {
        return Ok(self.iter(version)?.cloned().collect());
    }
}

impl<T> Versioned<T> for PersistentList<T> {
    fn get(&self, version: VersionId, index: usize) -> Result<&T> {
        return PersistentList::get(self, version, index);
    }

    fn set(&mut self, version: VersionId, index: usize, value: T) -> Result<VersionId> {
        return PersistentList::set(self, version, index, value);
    }

    fn get_size(&self, version: VersionId) -> Result<usize> {
        return PersistentList::get_size(self, version);
    }

    fn current_version(&self) -> VersionId {
        return PersistentList::current_version(self);
    }

    fn version_count(&self) -> usize {
        return PersistentList::version_count(self);
    }

    fn iter(&self, version: VersionId) -> Result<Iter<'_, T>> {
        return PersistentList::iter(self, version);
    }
}

/// Keeps every version of the array.
impl<T> From<PersistentArray<T>> for PersistentList<T> {
    fn from(array: PersistentArray<T>) -> PersistentList<T> {
        return PersistentList { table: array.into_table() };
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        return PersistentList::new(Vec::new());
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return PersistentList::new(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current_version();
        let mut list = f.debug_list();
        if let Ok(iter) = self.iter(current) {
            list.entries(iter);
        }
        return list.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn append_to_empty_list() {
        let mut list: PersistentList<&str> = PersistentList::default();
        let v1 = list.append(VersionId(0), "first").unwrap();
        assert_eq!(list.get_size(VersionId(0)), Ok(0));
        assert_eq!(list.get(v1, 0), Ok(&"first"));
        assert_eq!(list.height(v1), Ok(1));
    }

    #[test]
    fn append_from_unknown_version_fails() {
        let mut list = PersistentList::new([1]);
        let err = list.append(VersionId(3), 2).unwrap_err();
        assert_eq!(err, Error::InvalidVersion { version: 3, current: VersionId(0) });
        assert_eq!(list.version_count(), 1);
    }

    #[test]
    fn appends_from_the_same_version_diverge() {
        let mut list = PersistentList::new([1, 2]);
        let a = list.append(VersionId(0), 3).unwrap();
        let b = list.append(VersionId(0), 4).unwrap();
        assert_eq!(list.to_vec(a).unwrap(), vec![1, 2, 3]);
        assert_eq!(list.to_vec(b).unwrap(), vec![1, 2, 4]);
        assert_eq!(list.to_vec(VersionId(0)).unwrap(), vec![1, 2]);
    }

    #[test]
    fn push_extends_current() {
        let mut list = PersistentList::new(Vec::new());
        for i in 0..10 {
            assert_eq!(list.push(i), VersionId(i + 1));
        }
        assert_eq!(list.to_vec(list.current_version()).unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn from_array_keeps_history() {
        let mut array = PersistentArray::new([1, 2, 3]);
        let v1 = array.set(VersionId(0), 0, 9).unwrap();
        let mut list = PersistentList::from(array);
        let v2 = list.append(v1, 4).unwrap();
        assert_eq!(list.to_vec(VersionId(0)).unwrap(), vec![1, 2, 3]);
        assert_eq!(list.to_vec(v2).unwrap(), vec![9, 2, 3, 4]);
        assert_eq!(v2, VersionId(2));
    }
}
