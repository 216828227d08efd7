//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::MarketClient;
use crate::error::Result;

/// Update an existing entity.
///
/// Implement this trait for entity types that can be modified after
/// creation. Updates are partial: only fields present in the params are
/// sent, and the server decides how to merge them.
///
/// # Example
///
/// ```ignore
/// use panda_market::{MarketClient, Article, ArticlePatch, Update};
///
/// let client = MarketClient::new(panda_market::DEFAULT_BASE_URL)?;
/// let updated = Article::update(
///     &client,
///     1,
///     ArticlePatch {
///         title: Some("New Title".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// The ID type for this entity.
    type Id;

    /// Parameters for the update.
    type Params;

    /// Update the entity and return the updated version.
    ///
    /// # Arguments
    ///
    /// * `client` - The Panda Market API client
    /// * `id` - The entity identifier
    /// * `params` - Update parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &MarketClient, id: Self::Id, params: Self::Params) -> Result<Self>;
}
