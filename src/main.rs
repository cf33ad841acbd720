use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use userscreen::config::{Config, ConfigStore, ServiceSource};
use userscreen::logging::init_tracing;
use userscreen::presenter::UserPresenter;
use userscreen::service::{self, MockMode};
use userscreen::ui::runtime::ScreenHost;
use userscreen::ui::screen::render_lines;

/// Extra time the screen waits on top of the configured service delay.
const SETTLE_MARGIN: Duration = Duration::from_secs(10);

#[derive(Debug, Parser)]
#[command(name = "userscreen", version, about = "Load a list of users and render it")]
struct Args {
    /// Config file (default: ~/.config/userscreen/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the data source
    #[arg(long, value_enum)]
    source: Option<ServiceSource>,

    /// JSON file of user objects; implies --source file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Override the simulated service latency
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Override what the mock source answers with
    #[arg(long, value_enum)]
    mode: Option<MockMode>,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(source) = self.source {
            config.service.source = source;
        }
        if let Some(path) = &self.file {
            config.service.path = Some(path.clone());
            if self.source.is_none() {
                config.service.source = ServiceSource::File;
            }
        }
        if let Some(delay_ms) = self.delay_ms {
            config.service.delay_ms = delay_ms;
        }
        if let Some(mode) = self.mode {
            config.service.mode = mode;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let path = args.config.clone().unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path)?;
    let mut config = store.get();
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging);
    tracing::debug!(config_path = %store.path().display(), "Configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    let service = service::from_config(&config.service, runtime.handle().clone())?;
    let presenter = UserPresenter::new(service);

    let mut host = ScreenHost::new();
    let view = host.view();
    presenter.attach_view(&view);
    presenter.fetch_data();

    let state = host.run_until_settled(config.service.delay() + SETTLE_MARGIN, |state| {
        tracing::debug!(phase = ?state.phase(), "Screen updated");
    })?;

    for line in render_lines(state) {
        println!("{}", line);
    }

    Ok(())
}
