use config::Config;
use session::SessionService;

pub mod cache;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod session;
pub mod utils;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionService,
}

impl AppState {
    pub fn new(config: Config, sessions: SessionService) -> Self {
        Self { config, sessions }
    }
}
