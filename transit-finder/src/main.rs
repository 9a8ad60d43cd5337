use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use transit_finder::cli::{run_route_prompt, write_itinerary, write_routes, write_statistics};
use transit_finder::network::TransitMap;
use transit_finder::provider::{DataProvider, FixtureProvider, MbtaClient, MbtaConfig};

#[derive(Parser)]
#[command(name = "transit-finder")]
#[command(about = "Explore the subway network and find routes between stops", long_about = None)]
struct Cli {
    /// Read the network from a JSON fixture file instead of the MBTA API
    #[arg(long, global = true, value_name = "FILE")]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List all subway routes
    Routes,
    /// Show the largest and smallest routes and the stops connecting routes
    Stats,
    /// Find routes between two stops (prompts when stops are not given)
    Find {
        #[arg(long, requires = "to")]
        from: Option<String>,
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}

type AppResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.fixture {
        Some(path) => match FixtureProvider::from_path(path) {
            Ok(provider) => run(provider, cli.command).await,
            Err(e) => Err(e.into()),
        },
        None => match MbtaClient::new(mbta_config()) {
            Ok(client) => run(client, cli.command).await,
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "transit-finder failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Build the API config from `MBTA_API_KEY` and `MBTA_BASE_URL`.
fn mbta_config() -> MbtaConfig {
    let mut config = MbtaConfig::new();
    if let Ok(key) = std::env::var("MBTA_API_KEY") {
        config = config.with_api_key(key);
    }
    if let Ok(url) = std::env::var("MBTA_BASE_URL") {
        config = config.with_base_url(url);
    }
    config
}

async fn run<P: DataProvider>(provider: P, command: Option<Command>) -> AppResult {
    let mut map = TransitMap::new(provider);
    let mut stdout = io::stdout().lock();

    match command {
        Some(Command::Routes) => {
            map.load_routes().await?;
            write_routes(map.network(), &mut stdout)?;
        }
        Some(Command::Stats) => {
            let network = map.load().await?;
            write_statistics(network, &mut stdout)?;
        }
        Some(Command::Find {
            from: Some(from),
            to: Some(to),
        }) => {
            let network = map.load().await?;
            let origin = network.get_stop_from_string(&from)?;
            let destination = network.get_stop_from_string(&to)?;
            let itinerary = network.get_routes_for_stops(origin, destination);
            write_itinerary(origin, destination, &itinerary, &mut stdout)?;
        }
        Some(Command::Find { .. }) => {
            let network = map.load().await?;
            run_route_prompt(network, &mut io::stdin().lock(), &mut stdout)?;
        }
        None => {
            let network = map.load().await?;
            write_routes(network, &mut stdout)?;
            write_statistics(network, &mut stdout)?;
            run_route_prompt(network, &mut io::stdin().lock(), &mut stdout)?;
        }
    }

    Ok(())
}
