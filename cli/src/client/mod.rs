mod clex_client;
mod clex_client_models;

pub use clex_client::{has_source_extension, ClexClient, SourceInput};
pub use clex_client_models::{AnalysisRun, FileReport, ReportSection, StrippedView};
