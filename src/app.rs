use std::process::ExitCode;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::{
    analysis::{AnalysisClient, AnalysisSession},
    cli::Cli,
    config::{validate_api_url, AppConfig},
    mailbox::{EmlMailbox, Mailbox},
    panel::Panel,
};

pub struct CleardropApp {
    config: AppConfig,
    client: AnalysisClient,
}

impl CleardropApp {
    pub fn initialize(config: AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(format!("cleardrop/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        let client = AnalysisClient::new(http_client, config.analysis.timeout);
        Ok(Self { config, client })
    }

    pub async fn run(self, cli: Cli) -> Result<ExitCode> {
        let CleardropApp { mut config, client } = self;

        if let Some(api_url) = cli.api_url {
            config.analysis.api_url = validate_api_url("--api-url", api_url.trim().to_string())?;
        }
        if cli.no_attachments {
            config.analysis.include_attachments = false;
        }

        let mailbox = EmlMailbox::open(&cli.message)
            .await
            .with_context(|| format!("failed to open {}", cli.message.display()))?;

        let mut panel = Panel::new(config.panel.idle_label.clone());
        if !Panel::analyze_enabled(mailbox.item().is_some(), &config.analysis.api_url) {
            tracing::warn!(target: "app", "analysis unavailable: missing item or API URL");
        }

        tracing::info!(
            target: "app",
            message = %cli.message.display(),
            api_url = %config.analysis.api_url,
            "starting analysis"
        );
        let session = AnalysisSession::new(mailbox, client, config.analysis, config.panel.idle_label);

        let outcome = tokio::select! {
            res = session.analyze(&mut panel) => Some(res),
            _ = tokio::signal::ctrl_c() => None,
        };

        let succeeded = match outcome {
            Some(res) => res.is_ok(),
            None => {
                tracing::info!(target: "app", "analysis cancelled");
                panel.set_status("Analysis cancelled.", true);
                false
            }
        };

        if cli.raw {
            println!("{}", panel.result());
        } else {
            print!("{panel}");
        }

        Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
