use crate::config::Config;
use crate::routes::RouteTable;
use std::sync::Arc;

/// Shared application state, read-only once the server starts
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            routes: Arc::new(RouteTable::standard()),
            config: Arc::new(config),
        }
    }
}
