pub mod bok;
pub mod error;
pub mod routes;

use std::sync::Arc;

use bok_db::BokStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn BokStore>,
}

impl AppStateInner {
    pub fn new(store: impl BokStore + 'static) -> AppState {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}
