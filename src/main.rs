//! SpyGuard - command-line front end

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use spyguard_core::api::commands::{load_descriptors, SpyGuardApi};
use spyguard_core::constants;
use spyguard_core::logic::report::{ScanSummary, ThreatDetails};
use spyguard_core::logic::samples::sample_descriptors;
use spyguard_core::logic::threat::ClassificationResult;
use spyguard_core::{FeedConfig, ThreatDatabase};

#[derive(Parser)]
#[command(name = "spyguard")]
#[command(about = "Classify mobile app metadata with the SpyGuard 3-layer engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Stay on the embedded offline database
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify descriptors from a JSON file (array or single object)
    Classify {
        file: PathBuf,

        /// Group output by category or detection layer
        #[arg(short, long)]
        group: Option<GroupBy>,

        /// Attempt a remote database refresh first
        #[arg(long)]
        refresh: bool,
    },
    /// Classify the built-in demonstration apps and print a report
    Demo {
        #[arg(long)]
        refresh: bool,
    },
    /// Show threat database provenance
    Status {
        #[arg(long)]
        refresh: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupBy {
    Category,
    Layer,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    let config = if cli.offline {
        FeedConfig::disabled()
    } else {
        FeedConfig::default()
    };
    let api = SpyGuardApi::new(Arc::new(ThreatDatabase::new(config)));

    match cli.command {
        Commands::Classify { file, group, refresh } => {
            if refresh {
                api.refresh().await;
            }
            let descriptors = load_descriptors(&file)?;
            let results = api.classify_batch(&descriptors);

            let output = match group {
                None => serde_json::to_string_pretty(&results)?,
                Some(GroupBy::Category) => serde_json::to_string_pretty(&api.group_by_category(&results))?,
                Some(GroupBy::Layer) => serde_json::to_string_pretty(&api.group_by_layer(&results))?,
            };
            println!("{}", output);
        }
        Commands::Demo { refresh } => {
            if refresh {
                api.refresh().await;
            }
            let results = api.classify_batch(&sample_descriptors());
            print_report(&api, &results);
        }
        Commands::Status { refresh } => {
            let status = if refresh { api.refresh().await } else { api.status() };
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
    }

    Ok(())
}

fn print_report(api: &SpyGuardApi, results: &[ClassificationResult]) {
    let summary = ScanSummary::from_results(results);
    let status = api.status();

    println!("\n{}", "=".repeat(70));
    println!(
        "{} - {} apps scanned, {} threats (database: {})",
        constants::APP_NAME,
        summary.total_scanned,
        summary.threat_count,
        status.provenance
    );
    println!("{}", "=".repeat(70));

    for (category, members) in api.group_by_category(results) {
        println!("\n[{}] {} app(s)", category.label(), members.len());
        for result in &members {
            let details = ThreatDetails::from_result(result);
            println!(
                "  {:<24} {:<28} {:<7} {}",
                result.name, result.package_name, result.risk_level.as_str(), details.detection_method
            );
            println!("    {}", result.description);
            if !details.dangerous_permissions.is_empty() {
                println!("    dangerous: {}", details.dangerous_permissions.join(", "));
            }
            if details.hidden_app {
                println!("    hidden app (no launcher icon)");
            }
        }
    }

    println!(
        "\nHigh: {}  Medium: {}  Low: {}  -> {}",
        summary.high_risk,
        summary.medium_risk,
        summary.low_risk,
        if summary.protected { "Protected" } else { "At risk" }
    );
}
