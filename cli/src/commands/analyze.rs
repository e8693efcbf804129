use crate::client::{ClexClient, FileReport, ReportSection};
use crate::commands::shared::{KeywordArgs, OutputArgs, SourceArgs};
use crate::core::error::ClexError;
use crate::debug_log;
use clap::Args;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub keywords: KeywordArgs,

    #[arg(long = "strict", help = "Exit with code 6 if any input is unrecognized")]
    pub strict: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(
    args: &AnalyzeArgs,
    section: ReportSection,
) -> Result<(), Box<dyn std::error::Error>> {
    let client = ClexClient::new(args.keywords.keywords.as_deref())?;
    let input = args.source.input();
    debug_log!("Analyzing {input:?} ({section:?})");

    let run = client.analyze(&input)?;
    let reports: Vec<_> = run
        .reports
        .into_iter()
        .map(|report| report.restrict(section))
        .collect();
    let totals = match section {
        ReportSection::Tokens => None,
        _ => Some(FileReport::from_counts("total", &run.totals)),
    };

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_reports(&reports, totals.as_ref()));

    let errors = run.totals.errors();
    if args.strict && errors > 0 {
        return Err(Box::new(ClexError::UnrecognizedInput(errors)));
    }
    Ok(())
}
