use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cleardrop::{
    app::CleardropApp,
    cli::Cli,
    config,
    infrastructure::{directories, logging},
};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = config::load_config()?;
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    let app = CleardropApp::initialize(config)?;
    app.run(cli).await
}
