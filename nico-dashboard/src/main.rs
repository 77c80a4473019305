use clap::Parser;
use nico_dashboard::cli::{self, Cli};
use nico_dashboard::{DashboardConfig, Notifier, ToastKind, init_logger_with_file};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    let mut config = DashboardConfig::from_env();
    args.apply(&mut config);

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let notifier = Notifier::new();
    let result = run(args, &config, notifier.clone()).await;

    for toast in notifier.drain() {
        match toast.kind {
            ToastKind::Success => eprintln!("✓ {}", toast.message),
            ToastKind::Error => eprintln!("✗ {}", toast.message),
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Command failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli, config: &DashboardConfig, notifier: Notifier) -> anyhow::Result<()> {
    let api = nico_client::connect(&config.client)?;
    let mut stdout = std::io::stdout().lock();
    cli::run(args.command, api, notifier, config, args.yes, &mut stdout).await
}
