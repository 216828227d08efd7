//! Panda Market API client library.
//!
//! A Rust library for interacting with the Panda Market REST API using a
//! trait-based architecture where each operation (Get, List, Create,
//! Update, Delete) is defined as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use panda_market::{
//!     Article, Get, List, ListQuery, MarketClient, ProductVariant, DEFAULT_BASE_URL,
//! };
//!
//! #[tokio::main]
//! async fn main() -> panda_market::Result<()> {
//!     let client = MarketClient::new(DEFAULT_BASE_URL)?;
//!
//!     // Get an article by ID
//!     let article = Article::get(&client, 1).await?;
//!     println!("Article: {}", article.title);
//!
//!     // List products, classified into variants by their tags
//!     let products = ProductVariant::list(&client, &ListQuery::for_page(1, 5)).await?;
//!     println!("Found {} products", products.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized around five core traits:
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`List`] - Fetch one page of entities
//! - [`Create`] - Register a new entity
//! - [`Update`] - Partially modify an existing entity
//! - [`Delete`] - Remove an entity
//!
//! Each entity type (like [`Article`] or [`ProductRecord`]) implements the
//! traits supported by its API endpoints. Trait methods return
//! [`Result`], so failures carry their status code and message.
//!
//! # Sentinel wrappers
//!
//! For callers who prefer the original degrade-to-sentinel surface, free
//! functions like [`list_articles`] and [`get_product`] swallow every
//! failure, log it through `tracing`, and return an empty vec, `None`, or
//! `false` instead. With them, "not found" and "network down" are
//! indistinguishable except in the log stream; use the trait methods when
//! that distinction matters.
//!
//! # Configuration
//!
//! The client takes its base URL at construction time; pass
//! [`DEFAULT_BASE_URL`] for the production API or any other URL (such as a
//! local stub server) for testing. There is no global or environment
//! configuration.

mod client;
mod error;
mod models;
mod query;
mod traits;

// Re-export core types
pub use client::{MarketClient, DEFAULT_BASE_URL};
pub use error::{MarketError, Result};
pub use query::ListQuery;

// Re-export traits
pub use traits::{Create, Delete, Get, List, Update};

// Re-export models
pub use models::{
    // Article types
    Article,
    ArticleCreateParams,
    ArticlePatch,
    // Product types
    Product,
    ProductCreateParams,
    ProductPatch,
    ProductRecord,
    ProductVariant,
    ELECTRONICS_TAG,
};

// Re-export sentinel wrappers
pub use models::{create_article, delete_article, get_article, list_articles, update_article};
pub use models::{create_product, delete_product, get_product, list_products, update_product};
