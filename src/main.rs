mod charts;
mod cli_messages;
mod config;
mod consts;
mod data;
mod events;
mod logging;
mod session;
mod ui;
mod view;

use crate::config::{Config, get_config_path};
use crate::consts::cli_consts::MIN_WATCH_INTERVAL_SECS;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::ui::UIConfig;
use crate::view::{FilterField, FilterUpdate, KpiSelection};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::time::Duration;
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal sustainability monitoring dashboard
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Open insights for this KPI (energy, water, waste, emissions or overall)
        #[arg(long, value_name = "KPI")]
        kpi: Option<KpiSelection>,

        /// Override a saved filter for this session, e.g. `timeRange=week`
        #[arg(long = "filter", value_name = "FIELD=VALUE", action = ArgAction::Append)]
        filters: Vec<String>,

        /// Disable background colour
        #[arg(long = "no-background-color", action = ArgAction::SetTrue)]
        no_background_color: bool,

        /// Go straight to the dashboard
        #[arg(long = "skip-splash", action = ArgAction::SetTrue)]
        skip_splash: bool,
    },
    /// Print the dashboard as text
    Summary {
        /// Include insights for this KPI
        #[arg(long, value_name = "KPI")]
        kpi: Option<KpiSelection>,

        /// Override a saved filter for this run, e.g. `unit=unit1`
        #[arg(long = "filter", value_name = "FIELD=VALUE", action = ArgAction::Append)]
        filters: Vec<String>,

        /// Refresh and reprint every SECS seconds until Ctrl+C
        #[arg(long, value_name = "SECS")]
        watch: Option<u64>,
    },
    /// Save default filters to the config file
    SetFilters {
        /// Filter to save, e.g. `department=dyeing`
        #[arg(
            long = "filter",
            value_name = "FIELD=VALUE",
            action = ArgAction::Append,
            required = true
        )]
        filters: Vec<FilterUpdate>,
    },
    /// Delete the config file
    ResetConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init();

    let args = Args::parse();
    let config_path = get_config_path()?;

    let result = match args.command {
        Command::Start {
            kpi,
            filters,
            no_background_color,
            skip_splash,
        } => start(&config_path, kpi, filters, no_background_color, skip_splash),
        Command::Summary {
            kpi,
            filters,
            watch,
        } => summary(&config_path, kpi, filters, watch).await,
        Command::SetFilters { filters } => set_filters(&config_path, filters),
        Command::ResetConfig => reset_config(&config_path),
    };

    if let Err(e) = result {
        print_cmd_error!("Command failed.", &e.to_string());
        exit(1);
    }
    Ok(())
}

fn start(
    config_path: &Path,
    kpi: Option<KpiSelection>,
    filters: Vec<String>,
    no_background_color: bool,
    skip_splash: bool,
) -> Result<(), Box<dyn Error>> {
    let session = setup_session(config_path, kpi, &filters)?;
    // Command-line flags can only switch these off relative to the config
    let ui_config = UIConfig::new(
        session.config.with_background_color && !no_background_color,
        session.config.skip_splash || skip_splash,
    );
    run_tui_mode(session, ui_config)
}

async fn summary(
    config_path: &Path,
    kpi: Option<KpiSelection>,
    filters: Vec<String>,
    watch: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    if let Some(secs) = watch {
        if secs < MIN_WATCH_INTERVAL_SECS {
            return Err(format!(
                "--watch must be at least {} second(s), got {}",
                MIN_WATCH_INTERVAL_SECS, secs
            )
            .into());
        }
    }
    let session = setup_session(config_path, kpi, &filters)?;
    run_headless_mode(session, watch.map(Duration::from_secs)).await
}

fn set_filters(config_path: &Path, filters: Vec<FilterUpdate>) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load_or_default(config_path)?;
    for update in filters {
        update.apply(&mut config.default_filters);
    }
    config.save(config_path)?;
    let saved: Vec<String> = FilterField::iter()
        .map(|field| format!("{}={}", field, config.default_filters.get(field)))
        .collect();
    print_cmd_success!("Default filters saved.", "{}", saved.join(", "));
    Ok(())
}

fn reset_config(config_path: &Path) -> Result<(), Box<dyn Error>> {
    if !config_path.exists() {
        print_cmd_warn!("No config file to remove.", "{}", config_path.display());
        return Ok(());
    }
    print_cmd_info!("Removing config file...", "{}", config_path.display());
    Config::clear(config_path)?;
    Ok(())
}
