use std::sync::Arc;

use fxhash::FxHashMap;
use parking_lot::Mutex;

use crate::{endpoint_key::EndpointKey, route_result::RouteResult};

/// In-memory routes keyed by their endpoints.
///
/// The cache is unbounded and never evicts; entries live as long as the cache.
/// Every read and write goes through a single mutex held only for the map
/// operation itself.
#[derive(Default)]
pub struct RouteCache {
    routes: Mutex<FxHashMap<EndpointKey, Arc<RouteResult>>>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &EndpointKey) -> Option<Arc<RouteResult>> {
        self.routes.lock().get(key).cloned()
    }

    /// Stores `route` under `key`, replacing any previous entry.
    pub fn insert(&self, key: EndpointKey, route: Arc<RouteResult>) {
        self.routes.lock().insert(key, route);
    }

    pub fn len(&self) -> usize {
        self.routes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.lock().is_empty()
    }
}
