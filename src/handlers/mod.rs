// Two tiers of routes: public reads, token-protected everything else.
// One file per HTTP operation, re-exported here for use in routing.
pub mod products;

use crate::catalog::CatalogService;

/// Shared handler state: the catalog service, cheap to clone per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: CatalogService,
}

impl AppState {
    pub fn new(service: CatalogService) -> Self {
        Self { service }
    }
}
