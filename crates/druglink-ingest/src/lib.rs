//! File adapters for the linker: literature and drug sheets in, mapping
//! files in and out.

pub mod drugs;
pub mod error;
pub mod literature;
pub mod mapping_file;
pub mod sheet;
pub mod workbook;

pub use drugs::load_drug_rows;
pub use error::{IngestError, Result};
pub use literature::{LITERATURE_COLUMNS, load_literature};
pub use mapping_file::{RenderedMapping, read_mapping, render_rows, write_diff, write_mapping};
pub use sheet::{CsvSheet, SheetRow, ensure_exists, read_records, read_sheet};
pub use workbook::{WORKBOOK_EXTENSIONS, is_workbook, read_workbook_records};
