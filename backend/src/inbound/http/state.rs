//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`, so they depend only on the
//! lookup port and a clock and stay testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::JeepSalesQuery;

/// Dependency bundle for the jeep handlers.
#[derive(Clone)]
pub struct HttpState {
    pub jeeps: Arc<dyn JeepSalesQuery>,
    /// Source of error payload timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
}

impl HttpState {
    pub fn new(jeeps: Arc<dyn JeepSalesQuery>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { jeeps, clock }
    }
}
