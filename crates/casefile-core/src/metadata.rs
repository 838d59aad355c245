//! Per-document metadata record and the parties it is filed between.

use serde::{Deserialize, Serialize};

use crate::{extract_author, extract_case_number, extract_date, extract_title};

/// Fields pulled from one document's text.
///
/// Built once per file by [`ExtractedMetadata::from_text`] and discarded
/// after the rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// `YYMMDD`.
    pub date: String,
    pub title: String,
    pub author: String,
    pub case_number: Option<String>,
}

impl ExtractedMetadata {
    /// Run every extractor over `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            date: extract_date(text),
            title: extract_title(text),
            author: extract_author(text),
            case_number: extract_case_number(text),
        }
    }

    /// Use `default` when no case number was found in the text.
    ///
    /// An empty default counts as no default.
    pub fn with_default_case_number(mut self, default: Option<&str>) -> Self {
        if self.case_number.is_none() {
            self.case_number = default
                .filter(|d| !d.is_empty())
                .map(str::to_string);
        }
        self
    }
}

/// Client and opponent names shared by every file in a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parties {
    pub client: String,
    pub opponent: String,
    /// Case number to use when a document carries none.
    pub default_case_number: Option<String>,
}

impl Parties {
    pub fn new(client: impl Into<String>, opponent: impl Into<String>) -> Self {
        Self {
            client: client.into(),
            opponent: opponent.into(),
            default_case_number: None,
        }
    }

    pub fn with_default_case_number(mut self, case_number: impl Into<String>) -> Self {
        let case_number = case_number.into();
        self.default_case_number = (!case_number.is_empty()).then_some(case_number);
        self
    }

    /// Extract metadata from `text`, filling in the default case number.
    pub fn extract(&self, text: &str) -> ExtractedMetadata {
        ExtractedMetadata::from_text(text)
            .with_default_case_number(self.default_case_number.as_deref())
    }
}
