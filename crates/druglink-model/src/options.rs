//! Run options shared by the loaders and the linker.

use crate::error::{LinkError, Result};

/// Synonym columns read from the drug sheet when the caller does not say.
pub const DEFAULT_NUM_SYNONYMS: usize = 4;

/// Columns of the drug sheet that precede the synonyms (id, drug name).
pub const DRUG_SHEET_FIXED_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Number of synonym columns to read after the drug name.
    pub num_synonyms: usize,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            num_synonyms: DEFAULT_NUM_SYNONYMS,
        }
    }
}

impl LinkOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_num_synonyms(mut self, num_synonyms: usize) -> Self {
        self.num_synonyms = num_synonyms;
        self
    }

    /// Total columns a drug sheet needs for these options.
    pub fn required_drug_columns(&self) -> usize {
        DRUG_SHEET_FIXED_COLUMNS + self.num_synonyms
    }

    /// Fail when the drug sheet is too narrow for the requested synonyms.
    pub fn check_drug_columns(&self, available: usize) -> Result<()> {
        let required = self.required_drug_columns();
        if available < required {
            return Err(LinkError::configuration(format!(
                "{} synonym column(s) requested but the drug sheet has {available} column(s); \
                 {required} are required (id, drug name, synonyms)",
                self.num_synonyms
            )));
        }
        Ok(())
    }
}
