use std::sync::Arc;

use trivia_db::store::TriviaStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Question and category storage.
    pub store: Arc<dyn TriviaStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
