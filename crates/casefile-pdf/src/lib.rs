//! PDF side of casefile: text extraction and the in-place batch renamer.

mod error;
pub use error::{BatchError, SourceError};

mod source;
pub use source::{PdfTextSource, TextSource};

pub mod batch;
pub use batch::{
    BatchRunner, BatchSummary, CollisionPolicy, Outcome, RenamePlan, RunConfig, apply_plan,
    list_pdfs, plan_file, preview_plan,
};
