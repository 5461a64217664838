use serde::{Deserialize, Serialize};

/// A research paper referencing one or more plants in the knowledge base.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPaper {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub year: Option<i32>,
    pub pdf_url: Option<String>,
}

impl ResearchPaper {
    /// Comma-separated author list for table cells.
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }
}
