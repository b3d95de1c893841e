//! Request and response format of the YOURS routing API (gosmore backend).
//!
//! <http://wiki.openstreetmap.org/wiki/YOURS#Routing_API>

use serde::Deserialize;
use url::Url;

use crate::{
    coordinate::Coordinate, endpoint_key::EndpointKey, error::ParseError,
    route_result::RouteResult,
};

/// Vehicle parameter (`v`).
pub const VEHICLE_FOOT: &str = "foot";

/// Route type parameter (`fast`). `0` asks for the shortest route. The fastest
/// route type can return different paths depending on the direction of travel.
pub const ROUTE_TYPE_SHORTEST: &str = "0";

pub const FORMAT_GEOJSON: &str = "geojson";

/// Wire pairs are `[longitude, latitude]`.
pub type YoursPoint = Vec<f64>;

#[derive(Deserialize)]
struct RouteResponse {
    coordinates: Vec<YoursPoint>,
}

#[derive(Deserialize)]
struct DirectionsResponse {
    properties: DirectionsProperties,
}

#[derive(Deserialize)]
struct DirectionsProperties {
    description: String,
}

fn append_endpoints(url: &mut Url, endpoints: &EndpointKey) {
    url.query_pairs_mut()
        .append_pair("flat", &endpoints.start().latitude().to_string())
        .append_pair("flon", &endpoints.start().longitude().to_string())
        .append_pair("tlat", &endpoints.end().latitude().to_string())
        .append_pair("tlon", &endpoints.end().longitude().to_string())
        .append_pair("v", VEHICLE_FOOT)
        .append_pair("fast", ROUTE_TYPE_SHORTEST);
}

pub fn route_request_url(mut base: Url, endpoints: &EndpointKey) -> Url {
    base.query_pairs_mut().append_pair("format", FORMAT_GEOJSON);
    append_endpoints(&mut base, endpoints);
    base
}

pub fn directions_request_url(mut base: Url, endpoints: &EndpointKey) -> Url {
    append_endpoints(&mut base, endpoints);
    base.query_pairs_mut()
        .append_pair("instructions", "1")
        .append_pair("format", FORMAT_GEOJSON);
    base
}

/// Parses a route body, swapping each `[lon, lat]` pair into a [`Coordinate`].
///
/// Members after the first two (e.g. an altitude) are ignored.
pub fn parse_route(body: &str) -> Result<RouteResult, ParseError> {
    let response: RouteResponse = serde_json::from_str(body)?;

    let waypoints = response
        .coordinates
        .iter()
        .enumerate()
        .map(|(index, pair)| match pair.as_slice() {
            [lon, lat, ..] => Ok(Coordinate::new(*lat, *lon)),
            _ => Err(ParseError::InvalidPair {
                index,
                len: pair.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RouteResult::new(waypoints))
}

pub fn parse_directions(body: &str) -> Result<String, ParseError> {
    let response: DirectionsResponse = serde_json::from_str(body)?;

    Ok(response.properties.description)
}
