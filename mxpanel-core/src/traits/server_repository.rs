//! Server persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Server;

/// Read access to the platform's server records.
#[async_trait]
pub trait ServerRepository: Send + Sync {
    /// Get a server by ID.
    ///
    /// # Arguments
    /// * `id` - Server ID
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Server>>;
}
