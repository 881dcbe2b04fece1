/// One row of the literature sheet.
///
/// Missing cells are represented as empty strings, never as absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteratureRecord {
    pub pmid: String,
    pub year: String,
    pub title: String,
    pub abstract_text: String,
}

impl LiteratureRecord {
    pub fn new(
        pmid: impl Into<String>,
        year: impl Into<String>,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
    ) -> Self {
        Self {
            pmid: pmid.into(),
            year: year.into(),
            title: title.into(),
            abstract_text: abstract_text.into(),
        }
    }
}
