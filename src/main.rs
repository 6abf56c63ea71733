//! Mautic Campaigner - create Mautic campaigns and segments from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result};

use campaigner_app::config::{self, Settings};
use campaigner_core::logging;
use mautic_campaigner::CampaignInput;

/// Create a Mautic campaign and segment through the n8n webhook
#[derive(Parser, Debug)]
#[command(name = "campaigner", version)]
#[command(about = "Create Mautic campaigns and segments through an n8n webhook", long_about = None)]
struct Args {
    /// Webhook base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    webhook_url: Option<String>,

    /// Request timeout in seconds, 0 waits forever (overrides the config file)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Settings file (default: <config dir>/mautic-campaigner/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,

    /// Run without the TUI: fill the form from flags and print NDJSON events
    #[arg(long)]
    headless: bool,

    /// Campaign name
    #[arg(long, requires = "headless")]
    name: Option<String>,

    /// Segment name (default: "Segmento <name>")
    #[arg(long, requires = "headless")]
    segment_name: Option<String>,

    /// Target role, repeat for several
    #[arg(long = "role", value_name = "ROLE", requires = "headless")]
    roles: Vec<String>,

    #[arg(long, requires = "headless")]
    condominio: Option<String>,

    #[arg(long, requires = "headless")]
    cidade: Option<String>,

    #[arg(long, requires = "headless")]
    bairro: Option<String>,

    /// Two-letter state code, e.g. SP
    #[arg(long, value_name = "UF", requires = "headless")]
    estado: Option<String>,

    #[arg(long, requires = "headless")]
    campaign_description: Option<String>,

    #[arg(long, requires = "headless")]
    segment_description: Option<String>,

    /// Create campaign and segment unpublished
    #[arg(long, requires = "headless")]
    draft: bool,

    /// Print the payload instead of calling the webhook
    #[arg(long, requires = "headless")]
    preview: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = config::load_settings(self.config.as_deref());
        if let Some(url) = &self.webhook_url {
            settings.webhook.url = url.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            settings.webhook.timeout_secs = timeout_secs;
        }
        settings
    }

    fn campaign_input(&self) -> CampaignInput {
        CampaignInput {
            name: self.name.clone().unwrap_or_default(),
            segment_name: self.segment_name.clone(),
            roles: self.roles.clone(),
            condominio: self.condominio.clone(),
            cidade: self.cidade.clone(),
            bairro: self.bairro.clone(),
            estado: self.estado.clone(),
            campaign_description: self.campaign_description.clone(),
            segment_description: self.segment_description.clone(),
            draft: self.draft,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args.config.clone().unwrap_or_else(config::default_config_path);
        let written = config::init_config_file(&path)?;
        eprintln!("Settings file: {}", written.display());
        return Ok(());
    }

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {e}");
    }

    let settings = args.settings();

    if args.headless {
        if args.name.is_none() {
            bail!("--headless needs --name");
        }
        let outcome =
            mautic_campaigner::run_headless(settings, args.campaign_input(), args.preview).await?;
        if !outcome.is_success() {
            std::process::exit(outcome.exit_code());
        }
        return Ok(());
    }

    mautic_campaigner::run(settings).await?;
    Ok(())
}
