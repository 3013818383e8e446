//! Copy-everything versioned sequences.
//!
//! Each version is stored as its own full `Vec`. Every write clones the
//! source version, so writes are O(n) time and memory, but the behaviour is
//! obviously correct. The persistent implementations are checked against
//! this model in property tests.
//!
//! Operations return `None` where the persistent versions return an error:
//! an unknown version, or an index past the end.
//!
//! # Example
//!
//! ```
//! use naive::CopyingList;
//!
//! let mut list = CopyingList::new(vec![1, 2, 3]);
//! let v1 = list.append(0, 4).unwrap();
//! let v2 = list.set(v1, 0, 10).unwrap();
//! assert_eq!(list.version(0), Some(&[1, 2, 3][..]));
//! assert_eq!(list.version(v2), Some(&[10, 2, 3, 4][..]));
//! assert_eq!(list.get(5, 0), None);
//! ```

/// A versioned list that stores every version in full.
#[derive(Clone, Debug)]
pub struct CopyingList<T> {
    versions: Vec<Vec<T>>,
}

impl<T: Clone> CopyingList<T> {
    /// Create version 0 from `values`.
    pub fn new(values: Vec<T>) -> CopyingList<T> {
        return CopyingList { versions: vec![values] };
    }

    /// The full contents of `version`.
    pub fn version(&self, version: usize) -> Option<&[T]> {
        return self.versions.get(version).map(|v| v.as_slice());
    }

    pub fn get(&self, version: usize, index: usize) -> Option<&T> {
        return self.versions.get(version)?.get(index);
    }

    pub fn len(&self, version: usize) -> Option<usize> {
        return self.versions.get(version).map(|v| v.len());
    }

    pub fn current_version(&self) -> usize {
        return self.versions.len() - 1;
    }

    pub fn version_count(&self) -> usize {
        return self.versions.len();
    }

    /// Clone `version`, replace `index`, and publish the copy.
    pub fn set(&mut self, version: usize, index: usize, value: T) -> Option<usize> {
        let mut next = self.versions.get(version)?.clone();
        *next.get_mut(index)? = value;
        self.versions.push(next);
        return Some(self.current_version());
    }

    /// Clone `version`, push `value`, and publish the copy.
    pub fn append(&mut self, version: usize, value: T) -> Option<usize> {
        let mut next = self.versions.get(version)?.clone();
        next.push(value);
        self.versions.push(next);
        return Some(self.current_version());
    }
}
