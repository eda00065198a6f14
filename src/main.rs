use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{error, info};

use hero_scout::apis::{FileCatalog, SuperheroApi};
use hero_scout::app::ports::CatalogPort;
use hero_scout::config::Config;
use hero_scout::{logging, metrics, Selection, SelectionCriteria, TallestCharacterUseCase};

#[derive(Parser, Debug)]
#[command(name = "hero_scout")]
#[command(about = "Find the tallest superhero matching a gender and work filter")]
#[command(version)]
struct Cli {
    /// Read the catalog from a local JSON file instead of the network
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Override the catalog URL from config/environment
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tallest character matching the filters
    Tallest {
        /// Gender to match, case-insensitive
        #[arg(long)]
        gender: String,
        /// Whether the character must have an occupation
        #[arg(long, action = ArgAction::Set, default_value_t = true)]
        work: bool,
        /// Say why nothing was found
        #[arg(long)]
        explain: bool,
    },
    /// Summarize the catalog
    Stats {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn build_catalog(cli: &Cli) -> anyhow::Result<Box<dyn CatalogPort>> {
    if let Some(path) = &cli.file {
        return Ok(Box::new(FileCatalog::new(path)));
    }
    let mut config = Config::load()?;
    if let Some(url) = &cli.catalog_url {
        config.catalog.url = url.clone();
        config.validate()?;
    }
    Ok(Box::new(SuperheroApi::from_config(&config)?))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // --help and usage errors must not create logs/
    let cli = Cli::parse();

    logging::init_logging();
    metrics::init_metrics();

    let use_case = TallestCharacterUseCase::new(build_catalog(&cli)?);

    match cli.command {
        Commands::Tallest { gender, work, explain } => {
            let criteria = SelectionCriteria::new(gender, work);
            match use_case.run(&criteria).await {
                Selection::Found { record, height_cm } => {
                    info!(height_cm, "Selected tallest character");
                    println!("{}", serde_json::to_string_pretty(&record)?);
                    Ok(ExitCode::SUCCESS)
                }
                Selection::FetchFailed { reason } => {
                    if explain {
                        eprintln!("❌ Catalog could not be fetched: {}", reason);
                    } else {
                        eprintln!("No matching character found");
                    }
                    Ok(ExitCode::FAILURE)
                }
                Selection::NoMatch => {
                    if explain {
                        eprintln!(
                            "⚠️  No character with gender '{}' and work={} has a measurable height",
                            criteria.gender, criteria.requires_work
                        );
                    } else {
                        eprintln!("No matching character found");
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Stats { json } => match use_case.stats().await {
            Ok(stats) if json => {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                Ok(ExitCode::SUCCESS)
            }
            Ok(stats) => {
                println!("📊 Catalog summary:");
                println!("   Characters: {}", stats.total);
                println!("   Measurable height: {}", stats.measurable);
                println!("   With occupation: {}", stats.employed);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                error!("Catalog fetch failed: {}", e);
                eprintln!("❌ Catalog could not be fetched: {}", e);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
