// src/state.rs

//! Shared application state.

use std::sync::Arc;

use crate::config::Config;
use crate::services::MirrorService;
use crate::storage::PageStore;

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub mirror: Arc<MirrorService>,
    pub store: Arc<dyn PageStore>,
    pub config: Arc<Config>,
}
