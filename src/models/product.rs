//! Product model, variant classification, and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::MarketClient;
use crate::error::{MarketError, Result};
use crate::query::ListQuery;
use crate::traits::{Create, Delete, Get, List, Update};

/// Tag that marks a product as electronic.
pub const ELECTRONICS_TAG: &str = "electronics";

/// Fallback manufacturer for electronic products that do not declare one.
const UNKNOWN_MANUFACTURER: &str = "unknown";

/// A Panda Market product.
///
/// Like [`Article`](crate::Article), products are transient view objects
/// constructed fresh from each API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The product name.
    pub name: String,

    /// The product description.
    pub description: String,

    /// Sale price.
    pub price: f64,

    /// Hashtags attached to the product.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,

    /// Number of times the product has been favorited.
    #[serde(default)]
    pub favorite_count: u32,
}

impl Product {
    /// Increment the favorite count by one.
    ///
    /// Purely in-memory; no request is issued.
    pub fn favorite(&mut self) {
        self.favorite_count += 1;
    }
}

/// A raw product record as returned by the get/create/update endpoints.
///
/// Carries the optional `manufacturer` field alongside the base product.
/// Records are not classified into variants here; classification happens
/// only on the list path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The base product fields.
    #[serde(flatten)]
    pub product: Product,

    /// Manufacturer, present on some electronic products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}

/// A product classified by its tags.
///
/// Any record whose tags contain [`ELECTRONICS_TAG`] is materialized as
/// [`ProductVariant::Electronic`]; all others as
/// [`ProductVariant::Standard`]. This is a client-side classification
/// rule, not a server-declared type, and both variants expose the same
/// `favorite()` capability.
#[derive(Debug, Clone)]
pub enum ProductVariant {
    /// A plain product.
    Standard(Product),
    /// An electronic product, carrying its manufacturer.
    Electronic {
        /// The base product fields.
        product: Product,
        /// Manufacturer, `"unknown"` when the record omits it.
        manufacturer: String,
    },
}

impl ProductVariant {
    /// Classify a raw record into a variant.
    ///
    /// A non-electronic record drops any manufacturer it happened to carry.
    pub fn classify(record: ProductRecord) -> Self {
        if record.product.tags.iter().any(|t| t == ELECTRONICS_TAG) {
            Self::Electronic {
                manufacturer: record
                    .manufacturer
                    .unwrap_or_else(|| UNKNOWN_MANUFACTURER.to_string()),
                product: record.product,
            }
        } else {
            Self::Standard(record.product)
        }
    }

    /// The base product, whichever variant this is.
    pub fn product(&self) -> &Product {
        match self {
            Self::Standard(product) | Self::Electronic { product, .. } => product,
        }
    }

    /// Mutable access to the base product.
    pub fn product_mut(&mut self) -> &mut Product {
        match self {
            Self::Standard(product) | Self::Electronic { product, .. } => product,
        }
    }

    /// The manufacturer, if this is an electronic product.
    pub fn manufacturer(&self) -> Option<&str> {
        match self {
            Self::Standard(_) => None,
            Self::Electronic { manufacturer, .. } => Some(manufacturer),
        }
    }

    /// Whether this product was classified as electronic.
    pub fn is_electronic(&self) -> bool {
        matches!(self, Self::Electronic { .. })
    }

    /// Increment the favorite count by one. In-memory only.
    pub fn favorite(&mut self) {
        self.product_mut().favorite();
    }
}

/// Parameters for creating a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreateParams {
    /// The product name.
    pub name: String,
    /// The product description.
    pub description: String,
    /// Sale price.
    pub price: f64,
    /// Hashtags.
    pub tags: Vec<String>,
    /// Image URLs.
    pub images: Vec<String>,
}

/// Parameters for partially updating a product.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// New tags (replaces the stored list).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// New images (replaces the stored list).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// API response wrapper for listing products.
#[derive(Debug, Deserialize)]
struct ProductListResponse {
    products: Vec<ProductRecord>,
}

#[async_trait]
impl Get for ProductRecord {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &MarketClient, id: u64) -> Result<Self> {
        let path = format!("products/{id}");

        let response = client.get(&path).await?;
        let record: ProductRecord = response.json().await.map_err(MarketError::HttpError)?;
        Ok(record)
    }
}

#[async_trait]
impl List for ProductVariant {
    type Query = ListQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &MarketClient, query: &Self::Query) -> Result<Vec<Self>> {
        let response = client.get_with_query("products", query).await?;
        let data: ProductListResponse = response.json().await.map_err(MarketError::HttpError)?;
        Ok(data
            .products
            .into_iter()
            .map(ProductVariant::classify)
            .collect())
    }
}

#[async_trait]
impl Create for ProductRecord {
    type Params = ProductCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &MarketClient, params: Self::Params) -> Result<Self> {
        let response = client.post("products", &params).await?;
        let record: ProductRecord = response.json().await.map_err(MarketError::HttpError)?;
        Ok(record)
    }
}

#[async_trait]
impl Update for ProductRecord {
    type Id = u64;
    type Params = ProductPatch;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &MarketClient, id: u64, params: Self::Params) -> Result<Self> {
        let path = format!("products/{id}");

        let response = client.patch(&path, &params).await?;
        let record: ProductRecord = response.json().await.map_err(MarketError::HttpError)?;
        Ok(record)
    }
}

#[async_trait]
impl Delete for ProductRecord {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &MarketClient, id: u64) -> Result<()> {
        let path = format!("products/{id}");

        client.delete(&path).await?;
        Ok(())
    }
}

// Sentinel-returning wrappers, mirroring the article ones.

/// List classified products, returning an empty vec on any failure.
pub async fn list_products(client: &MarketClient, query: &ListQuery) -> Vec<ProductVariant> {
    match ProductVariant::list(client, query).await {
        Ok(products) => products,
        Err(err) => {
            tracing::error!(error = %err, "failed to list products");
            Vec::new()
        }
    }
}

/// Fetch one raw product record, returning `None` on any failure.
pub async fn get_product(client: &MarketClient, id: u64) -> Option<ProductRecord> {
    match ProductRecord::get(client, id).await {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::error!(error = %err, id, "failed to get product");
            None
        }
    }
}

/// Create a product, returning `None` on any failure.
pub async fn create_product(
    client: &MarketClient,
    params: ProductCreateParams,
) -> Option<ProductRecord> {
    match ProductRecord::create(client, params).await {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::error!(error = %err, "failed to create product");
            None
        }
    }
}

/// Partially update a product, returning `None` on any failure.
pub async fn update_product(
    client: &MarketClient,
    id: u64,
    params: ProductPatch,
) -> Option<ProductRecord> {
    match ProductRecord::update(client, id, params).await {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::error!(error = %err, id, "failed to update product");
            None
        }
    }
}

/// Delete a product, returning whether the deletion succeeded.
pub async fn delete_product(client: &MarketClient, id: u64) -> bool {
    match ProductRecord::delete(client, id).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error = %err, id, "failed to delete product");
            false
        }
    }
}
