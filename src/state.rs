use std::sync::Arc;

use juniper::Context as JuniperContext;

use crate::store::Store;

pub type AppState = Arc<AppData>;

#[derive(Clone)]
pub struct AppData {
    pub store: Store,
}

impl JuniperContext for AppData {}

impl AppData {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}
