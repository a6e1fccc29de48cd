use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Run the analysis HTTP server
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Analyze one repository and print the report as JSON
    Analyze {
        url: String,
        #[clap(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
