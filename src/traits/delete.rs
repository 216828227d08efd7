//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::MarketClient;
use crate::error::Result;

/// Delete an entity from the server.
///
/// The server returns only a success status for deletes, so this trait
/// yields `()` rather than the removed entity.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id;

    /// Delete the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &MarketClient, id: Self::Id) -> Result<()>;
}
