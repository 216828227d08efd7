//! Create trait for registering new entities.

use async_trait::async_trait;

use crate::client::MarketClient;
use crate::error::Result;

/// Create a new entity on the server.
///
/// Implement this trait for entity types that can be registered via a
/// POST to their collection endpoint.
///
/// # Example
///
/// ```ignore
/// use panda_market::{MarketClient, Article, ArticleCreateParams, Create};
///
/// let client = MarketClient::new(panda_market::DEFAULT_BASE_URL)?;
/// let created = Article::create(
///     &client,
///     ArticleCreateParams {
///         title: "Hello".to_string(),
///         content: "World".to_string(),
///         image: "https://img.example/1.jpg".to_string(),
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// Parameters sent in the creation request.
    type Params;

    /// Create the entity and return the server's version of it.
    ///
    /// # Arguments
    ///
    /// * `client` - The Panda Market API client
    /// * `params` - Creation parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn create(client: &MarketClient, params: Self::Params) -> Result<Self>;
}
