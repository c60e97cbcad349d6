use std::slice;

use crate::format::M3uEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct M3uPlaylist {
    /// Entries of this playlist, in play order
    pub entries: Vec<M3uEntry>,
}

impl M3uPlaylist {
    pub fn new(entries: Vec<M3uEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: M3uEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, M3uEntry> {
        self.entries.iter()
    }
}

impl From<Vec<M3uEntry>> for M3uPlaylist {
    fn from(value: Vec<M3uEntry>) -> Self {
        Self::new(value)
    }
}

impl FromIterator<M3uEntry> for M3uPlaylist {
    fn from_iter<T: IntoIterator<Item = M3uEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for M3uPlaylist {
    type Item = M3uEntry;
    type IntoIter = std::vec::IntoIter<M3uEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a M3uPlaylist {
    type Item = &'a M3uEntry;
    type IntoIter = slice::Iter<'a, M3uEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
