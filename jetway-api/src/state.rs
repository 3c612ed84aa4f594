use std::sync::Arc;
use jetway_order::ReservationRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ReservationRegistry>,
}

impl AppState {
    pub fn new(registry: ReservationRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
