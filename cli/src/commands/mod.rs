pub mod analyze;
pub mod shared;
pub mod strip;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Print tokens and the token count summary")]
    Analyze(analyze::AnalyzeArgs),
    #[command(about = "Print tokens only")]
    Tokens(analyze::AnalyzeArgs),
    #[command(about = "Print the token count summary only")]
    Counts(analyze::AnalyzeArgs),
    #[command(about = "Print the source with comments removed")]
    Strip(strip::StripArgs),
}

/// Names that select a subcommand instead of the default `analyze`.
pub const SUBCOMMAND_NAMES: &[&str] = &["analyze", "tokens", "counts", "strip", "help"];
