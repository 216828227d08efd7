//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::MarketClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier.
///
/// # Example
///
/// ```ignore
/// use panda_market::{MarketClient, Article, Get};
///
/// let client = MarketClient::new(panda_market::DEFAULT_BASE_URL)?;
/// let article = Article::get(&client, 1).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity (the server-assigned numeric ID).
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Panda Market API client
    /// * `id` - The entity identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get(client: &MarketClient, id: Self::Id) -> Result<Self>;
}
