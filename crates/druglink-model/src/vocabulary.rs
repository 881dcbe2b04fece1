//! Drug vocabulary types.
//!
//! A vocabulary is an insertion-ordered set of canonical drug names, each with
//! the synonyms that also trigger a match. Only canonical names are ever used
//! as output keys.

use std::collections::HashMap;

/// A raw row of the drug sheet before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrugRow {
    pub id: String,
    pub drug_name: String,
    /// Synonym cells in column order; blank cells are kept as empty strings.
    pub synonyms: Vec<String>,
}

impl DrugRow {
    pub fn new(id: impl Into<String>, drug_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            drug_name: drug_name.into(),
            synonyms: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = synonyms.into_iter().map(Into::into).collect();
        self
    }
}

/// A normalized drug with its match triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugEntry {
    pub canonical_name: String,
    pub synonyms: Vec<String>,
}

impl DrugEntry {
    /// Every name that triggers a match, canonical name first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.canonical_name.as_str())
            .chain(self.synonyms.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrugVocabulary {
    entries: Vec<DrugEntry>,
    index: HashMap<String, usize>,
}

impl DrugVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `synonyms` under `canonical_name`.
    ///
    /// An existing entry keeps its position and has its synonyms replaced; the
    /// previous synonyms are returned.
    pub fn insert(
        &mut self,
        canonical_name: impl Into<String>,
        synonyms: Vec<String>,
    ) -> Option<Vec<String>> {
        let canonical_name = canonical_name.into();
        if let Some(&idx) = self.index.get(&canonical_name) {
            return Some(std::mem::replace(&mut self.entries[idx].synonyms, synonyms));
        }
        self.index.insert(canonical_name.clone(), self.entries.len());
        self.entries.push(DrugEntry {
            canonical_name,
            synonyms,
        });
        None
    }

    pub fn get(&self, canonical_name: &str) -> Option<&DrugEntry> {
        self.index
            .get(canonical_name)
            .map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, canonical_name: &str) -> bool {
        self.index.contains_key(canonical_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrugEntry> {
        self.entries.iter()
    }

    pub fn canonical_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.canonical_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of synonyms across all drugs.
    pub fn synonym_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.synonyms.len()).sum()
    }
}

impl<'a> IntoIterator for &'a DrugVocabulary {
    type Item = &'a DrugEntry;
    type IntoIter = std::slice::Iter<'a, DrugEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
