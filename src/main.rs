//! Assembly Dashboard CLI
//!
//! Command-line access to the dashboard's display helpers and config:
//! - Format dates and numbers the way the pages do
//! - Compute pagination windows
//! - Generate and check config files

use anyhow::Context;
use assembly_dashboard::config::{generate_default_config, Config, LoggingConfig};
use assembly_dashboard::format::{format_date, format_integer, format_number};
use assembly_dashboard::pagination::{page_range, DEFAULT_MAX_BUTTONS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "assembly-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Display helpers and page configuration for the Assembly dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a date string as YYYY-MM-DD
    FormatDate {
        /// Date string, e.g. 2024-03-05T00:00:00 or 20240305
        input: String,
    },

    /// Format a number with thousands separators
    FormatNumber {
        /// Number to format
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the page buttons of a paginated table
    Paginate {
        /// Current page (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,
        /// Total number of pages
        #[arg(short, long)]
        total: u32,
        /// Number of page buttons
        #[arg(short, long, default_value_t = DEFAULT_MAX_BUTTONS)]
        max_buttons: u32,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and validate a config file
    CheckConfig {
        /// Config file to check
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config, discovery) = match &cli.config {
        Some(path) => {
            let config = Config::load_with_env(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            (config, None)
        }
        None => {
            let discovery = Config::discover(&Config::default_paths());
            (discovery.config.clone(), Some(discovery))
        }
    };
    init_logging(&config.logging);

    // Config search ran before the subscriber existed
    if let Some(discovery) = &discovery {
        discovery.log();
    }

    match cli.command {
        Commands::FormatDate { input } => {
            let formatted = format_date(Some(&input));
            if formatted.is_empty() {
                tracing::warn!("Unrecognized date: {}", input);
            }
            println!("{}", formatted);
        }

        Commands::FormatNumber { value } => {
            let formatted = match value.parse::<i64>() {
                Ok(integer) => format_integer(integer),
                Err(_) => {
                    let number: f64 = value
                        .parse()
                        .with_context(|| format!("not a number: {}", value))?;
                    format_number(number)
                }
            };
            println!("{}", formatted);
        }

        Commands::Paginate {
            page,
            total,
            max_buttons,
        } => {
            let pages: Vec<String> = page_range(page, total, max_buttons)
                .map(|p| if p == page { format!("[{}]", p) } else { p.to_string() })
                .collect();
            println!("{}", pages.join(" "));
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }

        Commands::CheckConfig { path } => {
            let checked = Config::load(&path)
                .with_context(|| format!("checking {}", path.display()))?;
            println!("Config OK: {}", path.display());
            println!("  dismissible alerts: {}", checked.markup.dismissible_alert);
            println!("  close button:       {}", checked.markup.close_button);
            println!("  clickable tables:   {}", checked.markup.clickable_table);
            println!("  table rows:         {}", checked.markup.table_row);
            println!("  target attribute:   {}", checked.markup.navigation_attribute);
            println!("  tooltips:           {}", checked.markup.tooltip);
            println!(
                "  alert delay:        {} ms",
                checked.behavior.alert_dismiss_delay_ms
            );
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!("assembly_dashboard={}", logging.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
