// src/main.rs
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use iced::{window, Application, Settings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use freefuse_hub::config::{Config, Overrides};
use freefuse_hub::render_text::render_text;
use freefuse_hub::selection::parse_filter_arg;
use freefuse_hub::{render, DataLoader, FilterValue, Section, SelectionState, ViewMode};

mod app;
mod ui;

use app::{AppFlags, FreeFuseHub};

#[derive(Debug, Parser)]
#[command(name = "freefuse-hub", version, about = "Intern onboarding dashboard")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "FREEFUSE_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding the resource CSV files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Default log level when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the dashboard window (default)
    Gui,
    /// Print one section to stdout
    Show {
        /// dashboard, announcements, tasks, resources, meetings, contacts or interns
        #[arg(default_value = "dashboard")]
        section: Section,

        /// View mode; defaults to the section's default view
        #[arg(long)]
        view: Option<ViewMode>,

        /// Case-insensitive substring filter, Field=value (repeatable)
        #[arg(long = "filter")]
        filters: Vec<String>,

        /// Exact-match filter, Field=value (repeatable)
        #[arg(long = "exact")]
        exact: Vec<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let overrides = Overrides {
        // clap already folded FREEFUSE_CONFIG into --config
        config_file: cli.config.clone(),
        data_dir: cli.data_dir.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = Config::resolve(&overrides, |key| std::env::var(key).ok())
        .context("Failed to initialize the application")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting FreeFuse Hub v{} (data dir {})",
        env!("CARGO_PKG_VERSION"),
        config.data_dir.display()
    );

    if !config.data_dir.exists() {
        warn!(
            "Data directory {} does not exist, sample data will be shown",
            config.data_dir.display()
        );
    }

    let loader = DataLoader::new(config.sources()).with_handler(config.csv_handler());

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(loader),
        Command::Show {
            section,
            view,
            filters,
            exact,
            format,
        } => {
            let selection = build_selection(section, view, &filters, &exact)?;
            show(loader, &config, &selection, format)
        }
    }
}

fn run_gui(loader: DataLoader) -> Result<()> {
    FreeFuseHub::run(Settings {
        window: window::Settings {
            size: (1280, 800),
            resizable: true,
            ..Default::default()
        },
        ..Settings::with_flags(AppFlags { loader })
    })?;
    Ok(())
}

fn build_selection(
    section: Section,
    view: Option<ViewMode>,
    filters: &[String],
    exact: &[String],
) -> Result<SelectionState> {
    let mut selection = SelectionState::new().with_section(section);

    let Section::Resource(kind) = section else {
        if view.is_some() || !filters.is_empty() || !exact.is_empty() {
            anyhow::bail!("the dashboard has no views or filters");
        }
        return Ok(selection);
    };

    if let Some(mode) = view {
        selection = selection.with_view(kind, mode)?;
    }
    for arg in filters {
        let (field, value) = parse_filter_arg(arg)?;
        selection = selection.with_filter(kind, field, FilterValue::Contains(value));
    }
    for arg in exact {
        let (field, value) = parse_filter_arg(arg)?;
        selection = selection.with_filter(kind, field, FilterValue::Exact(value));
    }

    Ok(selection)
}

fn show(loader: DataLoader, config: &Config, selection: &SelectionState, format: OutputFormat) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let dataset = runtime
        .block_on(freefuse_hub::loader::bootstrap(loader))
        .context("Failed to initialize the application")?;

    let description = render(&dataset, selection);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => out.write_all(render_text(&description).as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &description)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => config.csv_handler().write_table(&description, &mut out)?,
    }

    Ok(())
}
