//! State shared by the internal HTTP API handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{config::Config, service::agent::AgentService};

/// Cloned for each request through Axum's state extraction; every field is
/// cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool shared with the bot and scheduled jobs.
    pub db: DatabaseConnection,
    pub agent: AgentService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, agent: AgentService, config: Arc<Config>) -> Self {
        Self { db, agent, config }
    }
}
