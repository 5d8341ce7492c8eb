//! Builds the HTTP state from server configuration.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use jeep_sales::domain::JeepSalesService;
use jeep_sales::domain::ports::JeepRepository;
use jeep_sales::inbound::http::state::HttpState;
use jeep_sales::outbound::memory::InMemoryJeepRepository;
use jeep_sales::outbound::persistence::DieselJeepRepository;

use super::ServerConfig;

fn build_repository(config: &ServerConfig) -> Arc<dyn JeepRepository> {
    match &config.db_pool {
        Some(pool) => {
            info!("serving catalogue from PostgreSQL");
            Arc::new(DieselJeepRepository::new(pool.clone()))
        }
        None => {
            info!("serving reference catalogue from memory");
            Arc::new(InMemoryJeepRepository::with_reference_catalogue())
        }
    }
}

/// Wire the lookup service and clock into handler state.
pub fn build_http_state(config: &ServerConfig) -> HttpState {
    let service = JeepSalesService::new(build_repository(config));
    HttpState::new(Arc::new(service), Arc::new(DefaultClock))
}
