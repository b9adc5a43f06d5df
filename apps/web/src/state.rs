use crate::client::InsightClient;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub client: InsightClient,
    /// Backend address for `/health` and the upload body cap for the router.
    pub config: Config,
}
