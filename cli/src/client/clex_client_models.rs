use clex_lib::{Analysis, CategoryCounts, Token};
use serde::Serialize;

/// A named piece of source text, read from a file or given inline.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenView {
    pub category: &'static str,
    pub lexeme: String,
    pub line: usize,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            category: token.kind.name(),
            lexeme: token.value.clone(),
            line: token.line,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountView {
    pub category: &'static str,
    pub count: usize,
}

impl CountView {
    pub fn from_counts(counts: &CategoryCounts) -> Vec<CountView> {
        counts
            .iter()
            .map(|(category, count)| CountView {
                category: category.name(),
                count,
            })
            .collect()
    }
}

/// Which parts of a [`FileReport`] a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Full,
    Tokens,
    Counts,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<CountView>>,
    pub errors: usize,
}

impl FileReport {
    pub fn from_analysis(file: &str, analysis: &Analysis) -> Self {
        Self {
            tokens: Some(analysis.tokens.iter().map(TokenView::from).collect()),
            ..Self::from_counts(file, &analysis.counts)
        }
    }

    /// A counts-only report, used for the summary across several files.
    pub fn from_counts(file: &str, counts: &CategoryCounts) -> Self {
        Self {
            file: file.to_string(),
            tokens: None,
            counts: Some(CountView::from_counts(counts)),
            errors: counts.errors(),
        }
    }

    pub fn restrict(mut self, section: ReportSection) -> Self {
        match section {
            ReportSection::Full => {}
            ReportSection::Tokens => self.counts = None,
            ReportSection::Counts => self.tokens = None,
        }
        self
    }
}

/// Per-file reports of one invocation plus their summed counts.
#[derive(Debug, Clone, Default)]
pub struct AnalysisRun {
    pub reports: Vec<FileReport>,
    pub totals: CategoryCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrippedView {
    pub file: String,
    pub source: String,
}
