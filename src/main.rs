use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use packwise::{
    Catalog, ItemId, PackingEngine, PackwiseConfig, Season, TripForm, ViewController, logging,
    web,
};

/// Smart packing assistant: trip-aware packing lists and checklists
#[derive(Parser, Debug)]
#[command(name = "packwise", version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.config/packwise/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a packing list for a trip
    Generate(GenerateArgs),
    /// List destinations, activities and unresolved catalog references
    Catalog,
    /// Run the HTTP API
    Serve {
        /// Port to listen on, overrides the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Destination type, e.g. "Desert"
    #[arg(short, long)]
    destination: String,

    /// Trip length in days
    #[arg(short = 'n', long, default_value_t = 1)]
    duration: u32,

    /// spring, summer, fall or winter
    #[arg(short, long, value_parser = parse_season)]
    season: Option<Season>,

    /// Planned activity, repeat for several
    #[arg(short, long = "activity")]
    activities: Vec<String>,

    /// Item keys already packed, comma separated
    #[arg(short, long, value_delimiter = ',')]
    packed: Vec<String>,

    /// Print the checklist as JSON
    #[arg(long)]
    json: bool,
}

fn parse_season(code: &str) -> Result<Season, String> {
    Season::parse_optional(code).ok_or_else(|| format!("unknown season '{code}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PackwiseConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;

    let catalog = Catalog::load(&config.catalog).context("Failed to load catalog")?;

    match cli.command {
        Commands::Generate(args) => generate(&catalog, &config, args),
        Commands::Catalog => {
            print_catalog(&catalog);
            Ok(())
        }
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            web::run(&config, catalog).await
        }
    }
}

fn generate(catalog: &Catalog, config: &PackwiseConfig, args: GenerateArgs) -> Result<()> {
    let mut form = TripForm::new();
    form.set_destination(args.destination);
    form.duration = args.duration;
    form.set_season(args.season);
    for activity in &args.activities {
        form.toggle_activity(activity, true);
    }

    let mut controller = ViewController::new(PackingEngine::new(catalog), config.trip.clone());
    let checklist = controller.submit(&form)?;

    for key in &args.packed {
        let id: ItemId = key.trim().parse().map_err(|e| anyhow!("{e}"))?;
        checklist.set_checked(id, true);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&checklist.snapshot())?);
    } else {
        print!("{}", checklist.render_printable());
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("Destinations:");
    for destination in catalog.destinations() {
        println!("  {} ({})", destination.name, destination.climate);
    }

    println!("\nActivities:");
    for activity in catalog.activities() {
        println!("  {}", activity.name);
    }

    println!("\nSeasons:");
    for season in Season::ALL {
        println!("  {} - {}", season, season.label());
    }

    let unresolved = catalog.unresolved_references();
    if !unresolved.is_empty() {
        println!("\nUnresolved item references:");
        for r in unresolved {
            println!("  {} '{}' -> {}", r.profile_kind, r.profile, r.key);
        }
    }
}
