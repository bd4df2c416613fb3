//! Binary entry-point: loads settings, wires adapters and runs one command.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use reqwest::Url;
use tokio::runtime::Builder;
use tracing::debug;

use hr_dashboard::DashboardSettings;
use hr_dashboard::domain::UserDirectory;
use hr_dashboard::domain::ports::{FixtureLoginService, ThreadRngRatings, UserSource};
use hr_dashboard::inbound::cli::{Cli, Command, Dashboard};
use hr_dashboard::outbound::dummyjson::DummyJsonUserSource;
use hr_dashboard::outbound::example_source::ExampleUserSource;
use hr_dashboard::outbound::storage::FileKeyValueStore;
use hr_dashboard::telemetry;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = DashboardSettings::load()?;
    telemetry::init(settings.log_json);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("create Tokio runtime")?;
    runtime.block_on(async_main(cli.command, settings))
}

async fn async_main(command: Command, settings: DashboardSettings) -> color_eyre::Result<()> {
    if let Some((seed, count)) = settings.example_source() {
        debug!(seed, count, "serving example employees");
        let source = ExampleUserSource::new(seed, count).wrap_err("generate example employees")?;
        return dispatch(command, &settings, source).await;
    }

    let endpoint = Url::parse(settings.endpoint())
        .wrap_err_with(|| format!("invalid endpoint '{}'", settings.endpoint()))?;
    let source = DummyJsonUserSource::new(endpoint, settings.timeout())
        .wrap_err("create HTTP client")?;
    dispatch(command, &settings, source).await
}

async fn dispatch<U: UserSource>(
    command: Command,
    settings: &DashboardSettings,
    source: U,
) -> color_eyre::Result<()> {
    let data_dir = settings.data_dir();
    let store = Arc::new(
        FileKeyValueStore::open(&data_dir)
            .wrap_err_with(|| format!("open data directory '{data_dir}'"))?,
    );
    let directory = UserDirectory::new(
        Arc::new(source),
        Arc::new(ThreadRngRatings),
        settings.fetch_limit(),
    );
    let mut dashboard = Dashboard::new(store, Arc::new(FixtureLoginService), directory);

    let mut stdout = io::stdout().lock();
    dashboard
        .run(command, &mut stdout)
        .await
        .wrap_err("write command output")
}
