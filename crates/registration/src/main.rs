use clap::Parser;
use color_eyre::Result;
use registration::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    registration::run(args).await
}
