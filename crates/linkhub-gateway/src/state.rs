use std::sync::Arc;

use linkhub_core::Shortener;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
}

impl AppState {
    pub fn new(shortener: Arc<dyn Shortener>) -> Self {
        Self { shortener }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }
}
