use clap::Args;
use trailhead_routing::{Coordinate, RoutingClient};

use crate::parsers;

#[derive(Args)]
pub struct DirectionsArgs {
    /// Start point as `lat,lng`
    #[arg(allow_hyphen_values = true, value_parser = parsers::parse_coordinate)]
    from: Coordinate,

    /// End point as `lat,lng`
    #[arg(allow_hyphen_values = true, value_parser = parsers::parse_coordinate)]
    to: Coordinate,
}

pub async fn run(client: &RoutingClient, args: DirectionsArgs) -> anyhow::Result<()> {
    let directions = client.fetch_directions(args.from, args.to).await?;

    for line in directions.split("<br>") {
        println!("{}", line.trim());
    }

    Ok(())
}
