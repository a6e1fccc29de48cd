use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "repolyzer")]
#[clap(about = "GitHub repository analysis service", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
