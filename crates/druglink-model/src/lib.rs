pub mod error;
pub mod literature;
pub mod mapping;
pub mod options;
pub mod vocabulary;

pub use error::{LinkError, Result};
pub use literature::LiteratureRecord;
pub use mapping::{DiffMapping, MappingRow, MatchMapping};
pub use options::{DEFAULT_NUM_SYNONYMS, DRUG_SHEET_FIXED_COLUMNS, LinkOptions};
pub use vocabulary::{DrugEntry, DrugRow, DrugVocabulary};
