//! Matching and diffing core of the PMID to drug linker.
//!
//! Everything here works on rows that are already loaded in memory; reading
//! and writing files is left to `druglink-ingest`.

pub mod codec;
pub mod diff;
pub mod matcher;
pub mod normalize;
pub mod vocabulary;

pub use codec::{
    MAPPING_ROW_FIELDS, PMID_SEPARATOR, decode, decode_rows, encode, encode_diff, split_pmids,
};
pub use diff::{Changelog, Difference, diff};
pub use matcher::{MatchProgress, match_drugs_to_literature, match_drugs_to_literature_with_progress};
pub use normalize::normalize;
pub use vocabulary::build_vocabulary;
