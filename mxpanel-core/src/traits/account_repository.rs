//! Account persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::Account;

/// Read access to the platform's account records.
///
/// The core never mutates accounts; the hosting application owns the
/// storage engine and implements this seam over it.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Get an account by ID.
    ///
    /// # Arguments
    /// * `id` - Account ID
    async fn find_by_id(&self, id: &str) -> CoreResult<Option<Account>>;

    /// All accounts owned by one platform user.
    ///
    /// # Arguments
    /// * `owner_id` - Platform user ID
    async fn find_by_owner(&self, owner_id: &str) -> CoreResult<Vec<Account>>;
}
