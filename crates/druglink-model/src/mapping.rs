//! Drug to PMID mappings.
//!
//! [`MatchMapping`] is the result of a matching run: an insertion-ordered map
//! from canonical drug name to the PMIDs of the records that mention it.
//! [`DiffMapping`] holds the per-drug set difference of two match mappings.
//!
//! Neither type creates keys on lookup. Reading a missing drug yields an empty
//! collection and leaves the mapping untouched.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchMapping {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl MatchMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one PMID to `drug`, creating the entry if needed.
    pub fn append(&mut self, drug: &str, pmid: impl Into<String>) {
        self.entry_mut(drug).push(pmid.into());
    }

    /// Append PMIDs to `drug`, creating the entry if needed.
    ///
    /// The entry is created even when `pmids` is empty.
    pub fn extend<I, S>(&mut self, drug: &str, pmids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry_mut(drug).extend(pmids.into_iter().map(Into::into));
    }

    fn entry_mut(&mut self, drug: &str) -> &mut Vec<String> {
        let idx = match self.index.get(drug) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push((drug.to_string(), Vec::new()));
                self.index.insert(drug.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// PMIDs recorded for `drug`, or an empty slice.
    pub fn get(&self, drug: &str) -> &[String] {
        self.index
            .get(drug)
            .map_or(&[], |&idx| self.entries[idx].1.as_slice())
    }

    pub fn contains_key(&self, drug: &str) -> bool {
        self.index.contains_key(drug)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(drug, pmids)| (drug.as_str(), pmids.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(drug, _)| drug.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of (drug, PMID) links across all entries.
    pub fn link_count(&self) -> usize {
        self.entries.iter().map(|(_, pmids)| pmids.len()).sum()
    }
}

impl<K, V, S> FromIterator<(K, V)> for MatchMapping
where
    K: AsRef<str>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (drug, pmids) in iter {
            mapping.extend(drug.as_ref(), pmids);
        }
        mapping
    }
}

/// Per-drug PMIDs present in one mapping but absent from another.
///
/// PMID sets are kept sorted so that encoded output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffMapping {
    entries: Vec<(String, BTreeSet<String>)>,
    index: HashMap<String, usize>,
}

impl DiffMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the PMID set for `drug`, replacing any previous set.
    pub fn insert(&mut self, drug: impl Into<String>, pmids: BTreeSet<String>) {
        let drug = drug.into();
        if let Some(&idx) = self.index.get(&drug) {
            self.entries[idx].1 = pmids;
            return;
        }
        self.index.insert(drug.clone(), self.entries.len());
        self.entries.push((drug, pmids));
    }

    pub fn get(&self, drug: &str) -> Option<&BTreeSet<String>> {
        self.index.get(drug).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(drug, pmids)| (drug.as_str(), pmids))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(drug, _)| drug.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when no drug has any differing PMID.
    pub fn is_unchanged(&self) -> bool {
        self.entries.iter().all(|(_, pmids)| pmids.is_empty())
    }

    /// Drugs with at least one differing PMID.
    pub fn changed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, pmids)| !pmids.is_empty())
            .count()
    }

    pub fn pmid_count(&self) -> usize {
        self.entries.iter().map(|(_, pmids)| pmids.len()).sum()
    }
}

/// One row of a persisted mapping file: the drug and its comma-joined PMIDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRow {
    pub drug: String,
    pub pmids: String,
}

impl MappingRow {
    pub fn new(drug: impl Into<String>, pmids: impl Into<String>) -> Self {
        Self {
            drug: drug.into(),
            pmids: pmids.into(),
        }
    }
}
