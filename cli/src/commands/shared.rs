use crate::client::SourceInput;
use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to a source file or directory [default: .]",
        value_parser = validators::validate_path_exists
    )]
    pub source: Option<String>,

    #[arg(
        short = 'c',
        long = "code",
        help = "Source text to analyze instead of a file",
        conflicts_with = "source"
    )]
    pub code: Option<String>,
}

impl SourceArgs {
    pub fn input(&self) -> SourceInput {
        match (&self.code, &self.source) {
            (Some(code), _) => SourceInput::Inline(code.clone()),
            (None, Some(source)) => SourceInput::Path(PathBuf::from(source)),
            (None, None) => SourceInput::Path(PathBuf::from(".")),
        }
    }
}

#[derive(Debug, Args)]
pub struct KeywordArgs {
    #[arg(
        short = 'k',
        long = "keywords",
        value_name = "WORD,...",
        help = "Comma-separated reserved words replacing the default set",
        value_delimiter = ',',
        value_parser = validators::validate_keyword
    )]
    pub keywords: Option<Vec<String>>,
}
