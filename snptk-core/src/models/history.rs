//! Snapshots of the dbSNP history tables.
//!
//! Both structures are filled once while loading and only read afterwards.
use fxhash::{FxHashMap, FxHashSet};

/// Ids retired from dbSNP without a replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSet {
    ids: FxHashSet<String>,
}

impl DeletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, snp_id: impl Into<String>) -> bool {
        self.ids.insert(snp_id.into())
    }

    pub fn contains(&self, snp_id: &str) -> bool {
        self.ids.contains(snp_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DeletionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = DeletionSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for DeletionSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for snp_id in iter {
            self.insert(snp_id);
        }
    }
}

///
/// Obsolete id -> id it was merged into.
///
/// Inserting a key that is already present replaces its target, so loading
/// the merge history in file order leaves the latest merge for every key.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeMap {
    links: FxHashMap<String, String>,
}

impl MergeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a merge, returning the target it replaced if there was one.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> Option<String> {
        self.links.insert(from.into(), to.into())
    }

    pub fn get(&self, snp_id: &str) -> Option<&str> {
        self.links.get(snp_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MergeMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = MergeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for MergeMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (from, to) in iter {
            self.insert(from, to);
        }
    }
}
