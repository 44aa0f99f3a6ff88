use crate::config::Config;
use billet::InvoiceGenerator;
use std::sync::Arc;

/// Shared application state accessible to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Renderer configured with the service's page size
    pub generator: Arc<InvoiceGenerator>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = InvoiceGenerator::new().with_page_size(config.output.page_size);

        Self {
            generator: Arc::new(generator),
            config: Arc::new(config),
        }
    }
}
