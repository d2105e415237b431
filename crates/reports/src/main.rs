use anyhow::Context;
use clap::Parser;

use reports::cli::{run_check_doc, run_export, run_list, run_summary, Cli, Command};
use reports::shared::config::{load_config, resolve_path};
use reports::shared::logger::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, source) =
        load_config(cli.config.as_deref()).context("failed to load configuration")?;
    init_logging(&resolve_path(&config.logging.dir))?;
    tracing::info!("Config loaded from {}", source);
    tracing::debug!("reports v{}", env!("CARGO_PKG_VERSION"));

    let output = match &cli.command {
        Command::List(args) => run_list(args, &config)?,
        Command::Export(args) => {
            let now = chrono::Local::now().naive_local();
            let path = run_export(args, &config, now)?;
            path.display().to_string()
        }
        Command::CheckDoc { value } => run_check_doc(value),
        Command::Summary(args) => run_summary(args)?,
    };

    println!("{}", output);
    Ok(())
}
