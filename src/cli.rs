use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cleardrop", version, about = "Send an email for phishing analysis")]
pub struct Cli {
    /// The .eml message to analyze
    pub message: PathBuf,

    /// Analysis endpoint, overrides ANALYSIS_API_URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Print only the response body
    #[arg(long)]
    pub raw: bool,

    /// Send attachment metadata (name, size, type) without content
    #[arg(long)]
    pub no_attachments: bool,
}
