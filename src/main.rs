use clap::Parser;
use eyre::Result;

mod asset;

mod constants;

mod embed;
use embed::EmbedCommand;

mod golang;

#[derive(Debug, Parser)]
struct Cli {
    #[clap(flatten)]
    command: EmbedCommand,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    cli.command.run()
}
