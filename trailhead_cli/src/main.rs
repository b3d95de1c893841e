use clap::{Parser, Subcommand};
use trailhead_routing::{RoutingClient, RoutingClientConfig};

use crate::{directions::DirectionsArgs, route::RouteArgs};

mod directions;
mod parsers;
mod route;

const BASE_URL_ENV_VAR: &str = "TRAILHEAD_ROUTING_BASE_URL";

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,

    /// Base URL of the routing service, overrides TRAILHEAD_ROUTING_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the waypoints of a route through the given points
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// Print walking directions between two points
    #[command(visible_alias = "d")]
    Directions {
        #[command(flatten)]
        args: DirectionsArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut config = RoutingClientConfig::default();
    if let Some(base_url) = cli
        .base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
    {
        config.base_url = base_url;
    }

    let client = RoutingClient::new(config)?;

    let result = match cli.command {
        Commands::Route { args } => route::run(&client, args).await,
        Commands::Directions { args } => directions::run(&client, args).await,
    };

    client.shutdown();

    result
}
