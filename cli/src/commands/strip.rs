use crate::client::ClexClient;
use crate::commands::shared::{OutputArgs, SourceArgs};
use clap::Args;

#[derive(Debug, Args)]
pub struct StripArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute(args: &StripArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stripped = ClexClient::strip(&args.source.input())?;

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!("{}", formatter.format_stripped(&stripped));

    Ok(())
}
