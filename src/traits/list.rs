//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::MarketClient;
use crate::error::Result;

/// List entities with page/pageSize/keyword filtering.
///
/// Implement this trait for entity types that can be listed. A call fetches
/// exactly one page; the server does not report a total, so callers who want
/// more results request the next page themselves.
///
/// # Example
///
/// ```ignore
/// use panda_market::{MarketClient, ListQuery, ProductVariant, List};
///
/// let client = MarketClient::new(panda_market::DEFAULT_BASE_URL)?;
/// let products = ProductVariant::list(&client, &ListQuery::for_page(1, 50)).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// Query parameters for filtering.
    type Query: Default + Send + Sync;

    /// List entities matching the query (single page).
    ///
    /// # Arguments
    ///
    /// * `client` - The Panda Market API client
    /// * `query` - Page, page size, and keyword filter
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(client: &MarketClient, query: &Self::Query) -> Result<Vec<Self>>;
}
