//! Shared per-process state handed to every handler.

use std::sync::Arc;

use nb_config::Environment;
use nb_db::EmployeeStore;
use nb_schema::SchemaRegistry;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EmployeeStore>,
    pub schemas: Arc<SchemaRegistry>,
    pub environment: Environment,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn EmployeeStore>, environment: Environment) -> Self {
        Self {
            store,
            schemas: Arc::new(SchemaRegistry::new()),
            environment,
        }
    }
}
