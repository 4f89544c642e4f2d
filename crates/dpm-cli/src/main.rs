mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dpm")]
#[command(about = "Discovery Place membership page content")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Summarize a cost breakdown against regular admission
    Summary {
        /// JSON file containing a breakdown (`items`, optional `guestSavingsDetails`)
        #[arg(long)]
        breakdown: PathBuf,
        /// Regular admission total; falls back to `DPM_REGULAR_ADMISSION_COST`
        #[arg(long)]
        regular_cost: Option<Decimal>,
    },
    /// Per-location visit distribution and insight
    Distribution {
        /// Read visit counts from a recommendation JSON file
        #[arg(long, conflicts_with_all = ["science", "dpkh", "dpkr"])]
        recommendation: Option<PathBuf>,
        /// Planned visits to Discovery Place Science
        #[arg(long, default_value_t = 0)]
        science: u32,
        /// Planned visits to Discovery Place Kids-Huntersville
        #[arg(long, default_value_t = 0)]
        dpkh: u32,
        /// Planned visits to Discovery Place Kids-Rockingham
        #[arg(long, default_value_t = 0)]
        dpkr: u32,
    },
    /// Month-by-month visit estimate
    Seasonal {
        /// Annual visit total
        #[arg(long, required_unless_present = "recommendation", conflicts_with = "recommendation")]
        total: Option<u64>,
        /// Use the visit total from a recommendation JSON file
        #[arg(long)]
        recommendation: Option<PathBuf>,
    },
    /// FAQ categories with rendered answers
    Faq {
        /// Recommendation JSON file used to pick categories and fill answers
        #[arg(long)]
        recommendation: Option<PathBuf>,
    },
    /// Promotional banner for a recommendation
    Banner {
        /// Recommendation JSON file
        #[arg(long)]
        recommendation: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = dpm_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, faq_path = ?config.faq_path, "loaded configuration");

    let output = match cli.command {
        Some(Commands::Summary {
            breakdown,
            regular_cost,
        }) => commands::run_summary(&config, &breakdown, regular_cost)?,
        Some(Commands::Distribution {
            recommendation,
            science,
            dpkh,
            dpkr,
        }) => commands::run_distribution(recommendation.as_deref(), science, dpkh, dpkr)?,
        Some(Commands::Seasonal {
            total,
            recommendation,
        }) => commands::run_seasonal(total, recommendation.as_deref())?,
        Some(Commands::Faq { recommendation }) => {
            commands::run_faq(&config, recommendation.as_deref())?
        }
        Some(Commands::Banner { recommendation }) => commands::run_banner(&recommendation)?,
        None => {
            println!("dpm: pass a subcommand (summary, distribution, seasonal, faq, banner); see --help");
            return Ok(());
        }
    };

    println!("{}", commands::render_output(&config, &output)?);
    Ok(())
}
