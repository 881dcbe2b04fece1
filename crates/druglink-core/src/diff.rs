//! One-directional mapping differences and changelogs.

use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use druglink_model::{DiffMapping, MatchMapping};

/// PMIDs listed under each drug of `left` that `right` does not list for that
/// drug.
///
/// The result has exactly the keys of `left`, including drugs whose
/// difference is empty. Drugs missing from `right` contribute their full PMID
/// set; drugs only in `right` are ignored. Call it both ways for additions
/// and removals.
pub fn diff(left: &MatchMapping, right: &MatchMapping) -> DiffMapping {
    let mut result = DiffMapping::new();
    for (drug, pmids) in left.iter() {
        let known: HashSet<&str> = right.get(drug).iter().map(String::as_str).collect();
        let missing: BTreeSet<String> = pmids
            .iter()
            .filter(|pmid| !known.contains(pmid.as_str()))
            .cloned()
            .collect();
        result.insert(drug, missing);
    }
    result
}

/// Method form of [`diff`].
pub trait Difference {
    fn difference(&self, other: &Self) -> DiffMapping;
}

impl Difference for MatchMapping {
    fn difference(&self, other: &Self) -> DiffMapping {
        diff(self, other)
    }
}

/// Additions and removals between a prior mapping and a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    /// `current - previous`: PMIDs newly linked to a drug.
    pub added: DiffMapping,
    /// `previous - current`: PMIDs no longer linked to a drug.
    pub removed: DiffMapping,
}

impl Changelog {
    pub fn between(previous: &MatchMapping, current: &MatchMapping) -> Self {
        let changelog = Self {
            added: diff(current, previous),
            removed: diff(previous, current),
        };
        debug!(
            added_pmids = changelog.added.pmid_count(),
            removed_pmids = changelog.removed.pmid_count(),
            "computed changelog"
        );
        changelog
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_unchanged() && self.removed.is_unchanged()
    }
}
