pub mod config;
pub mod coordinate;
pub mod endpoint_key;
pub mod error;
pub mod route_cache;
pub mod route_result;
pub mod routing_client;
pub mod transport;
pub mod yours_api;

#[doc(hidden)]
pub mod test_support;

pub use config::RoutingClientConfig;
pub use coordinate::Coordinate;
pub use endpoint_key::EndpointKey;
pub use error::{ParseError, RoutingError, TransportError};
pub use route_result::RouteResult;
pub use routing_client::RoutingClient;
pub use transport::{HttpTransport, ReqwestTransport};
