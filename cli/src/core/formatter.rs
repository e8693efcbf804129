use crate::client::{FileReport, StrippedView};
use clap::ValueEnum;
use clex_lib::token::ERROR_NAME;
use serde::Serialize;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_report(report: &FileReport) -> String {
    let mut out = String::new();
    if let Some(tokens) = &report.tokens {
        for token in tokens {
            out.push_str(&format!("{}: {}\n", token.category, token.lexeme));
        }
    }
    if let Some(counts) = &report.counts {
        // Blank line between the token list and the summary.
        if report.tokens.is_some() {
            out.push('\n');
        }
        out.push_str("Token count summary:\n");
        for count in counts {
            out.push_str(&format!("{}: {}\n", count.category, count.count));
        }
        out.push_str(&format!("{ERROR_NAME}: {}\n", report.errors));
    }
    out
}

/// Header of the summed counts after a multi-file text report.
const TOTALS_HEADER: &str = "all files";

fn with_header(file: &str, body: &str) -> String {
    format!("== {file} ==\n{body}")
}

fn to_json<T: Serialize + ?Sized>(model: &T) -> String {
    serde_json::to_string_pretty(model).unwrap_or_else(|_| "[]".to_string())
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    /// A single report is printed bare; several get a `== file ==` header
    /// each and are separated by a blank line. `totals` is appended as a last
    /// block in text output only when there are several reports.
    pub fn format_reports(
        &self,
        reports: &[FileReport],
        totals: Option<&FileReport>,
    ) -> String {
        match self.engine {
            OutputFormat::Text => match reports {
                [report] => render_report(report),
                _ => reports
                    .iter()
                    .map(|report| with_header(&report.file, &render_report(report)))
                    .chain(totals.map(|totals| with_header(TOTALS_HEADER, &render_report(totals))))
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
            OutputFormat::Json => to_json(reports),
        }
    }

    pub fn format_stripped(&self, views: &[StrippedView]) -> String {
        match self.engine {
            OutputFormat::Text => {
                let terminated = |source: &str| {
                    if source.is_empty() || source.ends_with('\n') {
                        source.to_string()
                    } else {
                        format!("{source}\n")
                    }
                };
                match views {
                    [view] => terminated(&view.source),
                    _ => views
                        .iter()
                        .map(|view| with_header(&view.file, &terminated(&view.source)))
                        .collect::<Vec<_>>()
                        .join("\n"),
                }
            }
            OutputFormat::Json => to_json(views),
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
