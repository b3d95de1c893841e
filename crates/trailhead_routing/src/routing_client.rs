use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    config::RoutingClientConfig,
    coordinate::Coordinate,
    endpoint_key::EndpointKey,
    error::{RoutingError, TransportError},
    route_cache::RouteCache,
    route_result::RouteResult,
    transport::{HttpTransport, ReqwestTransport},
    yours_api,
};

/// Looks up walking routes from the remote routing service and caches them by
/// endpoints.
///
/// The client can be shared between tasks (e.g. behind an `Arc`). Each
/// instance owns its cache, two clients never see each other's routes.
pub struct RoutingClient<T = ReqwestTransport> {
    config: RoutingClientConfig,
    transport: T,
    cache: RouteCache,
}

impl RoutingClient<ReqwestTransport> {
    pub fn new(config: RoutingClientConfig) -> Result<Self, RoutingError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T> RoutingClient<T>
where
    T: HttpTransport,
{
    pub fn with_transport(config: RoutingClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            cache: RouteCache::new(),
        }
    }

    pub fn config(&self) -> &RoutingClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the route between `start` and `end`.
    ///
    /// With `use_cache` a cached route is returned as is, without a request.
    /// A freshly fetched route is stored in the cache whether or not
    /// `use_cache` is set, so a later cached lookup for the same endpoints
    /// will find it.
    ///
    /// The cache lock is not held during the request: concurrent misses for
    /// the same endpoints each hit the service and the last one to finish
    /// stays in the cache.
    pub async fn fetch_route(
        &self,
        start: Coordinate,
        end: Coordinate,
        use_cache: bool,
    ) -> Result<Arc<RouteResult>, RoutingError> {
        let endpoints = EndpointKey::new(start, end);

        if use_cache {
            if let Some(route) = self.cache.get(&endpoints) {
                debug!("RoutingClient: cache hit for {}", endpoints);
                return Ok(route);
            }
            debug!("RoutingClient: cache miss for {}", endpoints);
        }

        let route = Arc::new(self.fetch_route_from_service(&endpoints).await?);
        self.cache.insert(endpoints, route.clone());

        Ok(route)
    }

    /// Returns the human-readable directions between `start` and `end`.
    /// Directions are never cached.
    pub async fn fetch_directions(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<String, RoutingError> {
        let endpoints = EndpointKey::new(start, end);
        let url = yours_api::directions_request_url(self.config.directions_url()?, &endpoints);

        debug!("RoutingClient: requesting directions {}", url);
        let body = self.transport.get(url).await?;

        yours_api::parse_directions(&body).map_err(|err| {
            warn!("RoutingClient: invalid directions response for {}: {}", endpoints, err);
            err.into()
        })
    }

    /// Route previously stored for these endpoints, if any.
    pub fn cached_route(&self, start: Coordinate, end: Coordinate) -> Option<Arc<RouteResult>> {
        self.cache.get(&EndpointKey::new(start, end))
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Releases the transport's connections. Safe to call before any request
    /// and more than once. Requests made afterwards fail with
    /// [`TransportError::Closed`].
    pub fn shutdown(&self) {
        self.transport.shutdown();
    }

    async fn fetch_route_from_service(
        &self,
        endpoints: &EndpointKey,
    ) -> Result<RouteResult, RoutingError> {
        let url = yours_api::route_request_url(self.config.route_url()?, endpoints);

        debug!("RoutingClient: requesting route {}", url);
        let body = self.transport.get(url).await.inspect_err(|err| {
            if !matches!(err, TransportError::Closed) {
                warn!("RoutingClient: route request for {} failed: {}", endpoints, err);
            }
        })?;

        yours_api::parse_route(&body).map_err(|err| {
            warn!("RoutingClient: invalid route response for {}: {}", endpoints, err);
            err.into()
        })
    }
}
