use anyhow::ensure;
use clap::Args;
use tracing::info;
use trailhead_routing::{Coordinate, RoutingClient};

use crate::parsers;

#[derive(Args)]
pub struct RouteArgs {
    /// Points to visit in order, as `lat,lng`
    #[arg(
        required = true,
        num_args = 2..,
        allow_hyphen_values = true,
        value_parser = parsers::parse_coordinate
    )]
    points: Vec<Coordinate>,

    /// Ignore routes already fetched for a repeated leg
    #[arg(long)]
    no_cache: bool,
}

pub async fn run(client: &RoutingClient, args: RouteArgs) -> anyhow::Result<()> {
    ensure!(args.points.len() >= 2, "A route needs at least two points");

    let mut coordinates: Vec<[f64; 2]> = Vec::new();

    for leg in args.points.windows(2) {
        let route = client.fetch_route(leg[0], leg[1], !args.no_cache).await?;
        info!("{} -> {}: {} waypoints", leg[0], leg[1], route.len());

        append_leg(
            &mut coordinates,
            route
                .waypoints()
                .iter()
                .map(|waypoint| [waypoint.longitude(), waypoint.latitude()]),
        );
    }

    println!("{}", serde_json::to_string(&coordinates)?);

    Ok(())
}

/// Appends a leg to `path`, dropping its first point when it repeats the point
/// the previous leg ended on.
fn append_leg(path: &mut Vec<[f64; 2]>, leg: impl IntoIterator<Item = [f64; 2]>) {
    let mut leg = leg.into_iter().peekable();

    if path.last() == leg.peek() {
        leg.next();
    }
    path.extend(leg);
}
