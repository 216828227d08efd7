//! Article model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::MarketClient;
use crate::error::{MarketError, Result};
use crate::query::ListQuery;
use crate::traits::{Create, Delete, Get, List, Update};

/// A Panda Market article.
///
/// Articles are transient view objects constructed fresh from each API
/// response; the server remains the system of record, and no identity
/// field is held client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The article title.
    pub title: String,

    /// The article body.
    pub content: String,

    /// The author. The server may omit this or send null.
    #[serde(default)]
    pub writer: Option<String>,

    /// Number of likes.
    #[serde(default)]
    pub like_count: u32,

    /// When the article was created. Filled with the current time when
    /// the server omits it.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Article {
    /// Increment the like count by one.
    ///
    /// Purely in-memory; no request is issued. Callers who want the new
    /// count persisted must send it through [`Update`] themselves.
    pub fn like(&mut self) {
        self.like_count += 1;
    }
}

/// Parameters for creating an article.
///
/// Exactly these three fields are sent; nothing else.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCreateParams {
    /// The article title.
    pub title: String,
    /// The article body.
    pub content: String,
    /// Attached image URL.
    pub image: String,
}

/// Parameters for partially updating an article.
///
/// Only fields set to `Some` are sent; the server merges them into the
/// stored record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// New image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// API response wrapper for listing articles.
#[derive(Debug, Deserialize)]
struct ArticleListResponse {
    articles: Vec<Article>,
}

#[async_trait]
impl Get for Article {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn get(client: &MarketClient, id: u64) -> Result<Self> {
        let path = format!("articles/{id}");

        let response = client.get(&path).await?;
        let article: Article = response.json().await.map_err(MarketError::HttpError)?;
        Ok(article)
    }
}

#[async_trait]
impl List for Article {
    type Query = ListQuery;

    #[tracing::instrument(skip(client))]
    async fn list(client: &MarketClient, query: &Self::Query) -> Result<Vec<Self>> {
        let response = client.get_with_query("articles", query).await?;
        let data: ArticleListResponse = response.json().await.map_err(MarketError::HttpError)?;
        Ok(data.articles)
    }
}

#[async_trait]
impl Create for Article {
    type Params = ArticleCreateParams;

    #[tracing::instrument(skip(client, params))]
    async fn create(client: &MarketClient, params: Self::Params) -> Result<Self> {
        let response = client.post("articles", &params).await?;
        let article: Article = response.json().await.map_err(MarketError::HttpError)?;
        Ok(article)
    }
}

#[async_trait]
impl Update for Article {
    type Id = u64;
    type Params = ArticlePatch;

    #[tracing::instrument(skip(client, params))]
    async fn update(client: &MarketClient, id: u64, params: Self::Params) -> Result<Self> {
        let path = format!("articles/{id}");

        let response = client.patch(&path, &params).await?;
        let article: Article = response.json().await.map_err(MarketError::HttpError)?;
        Ok(article)
    }
}

#[async_trait]
impl Delete for Article {
    type Id = u64;

    #[tracing::instrument(skip(client))]
    async fn delete(client: &MarketClient, id: u64) -> Result<()> {
        let path = format!("articles/{id}");

        client.delete(&path).await?;
        Ok(())
    }
}

// Sentinel-returning wrappers.
//
// These never propagate an error: any failure (non-2xx status or network
// fault alike) is logged and converted to the operation's sentinel value.
// Callers who need to distinguish failures use the trait methods directly.

/// List articles, returning an empty vec on any failure.
pub async fn list_articles(client: &MarketClient, query: &ListQuery) -> Vec<Article> {
    match Article::list(client, query).await {
        Ok(articles) => articles,
        Err(err) => {
            tracing::error!(error = %err, "failed to list articles");
            Vec::new()
        }
    }
}

/// Fetch one article, returning `None` on any failure.
pub async fn get_article(client: &MarketClient, id: u64) -> Option<Article> {
    match Article::get(client, id).await {
        Ok(article) => Some(article),
        Err(err) => {
            tracing::error!(error = %err, id, "failed to get article");
            None
        }
    }
}

/// Create an article, returning `None` on any failure.
pub async fn create_article(
    client: &MarketClient,
    params: ArticleCreateParams,
) -> Option<Article> {
    match Article::create(client, params).await {
        Ok(article) => Some(article),
        Err(err) => {
            tracing::error!(error = %err, "failed to create article");
            None
        }
    }
}

/// Partially update an article, returning `None` on any failure.
pub async fn update_article(
    client: &MarketClient,
    id: u64,
    params: ArticlePatch,
) -> Option<Article> {
    match Article::update(client, id, params).await {
        Ok(article) => Some(article),
        Err(err) => {
            tracing::error!(error = %err, id, "failed to update article");
            None
        }
    }
}

/// Delete an article, returning whether the deletion succeeded.
pub async fn delete_article(client: &MarketClient, id: u64) -> bool {
    match Article::delete(client, id).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(error = %err, id, "failed to delete article");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_increments_count() {
        let mut article: Article = serde_json::from_value(serde_json::json!({
            "title": "T",
            "content": "C",
            "writer": "W",
            "likeCount": 3,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        article.like();
        assert_eq!(article.like_count, 4);

        // Nothing else changes
        assert_eq!(article.title, "T");
        assert_eq!(article.writer.as_deref(), Some("W"));
    }

    #[test]
    fn test_created_at_defaults_to_now() {
        let before = Utc::now();
        let article: Article = serde_json::from_value(serde_json::json!({
            "title": "T",
            "content": "C"
        }))
        .unwrap();

        assert!(article.created_at >= before);
        assert!(!article.created_at.to_rfc3339().is_empty());
    }

    #[test]
    fn test_like_count_defaults_to_zero() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "title": "T",
            "content": "C",
            "writer": null
        }))
        .unwrap();

        assert_eq!(article.like_count, 0);
        assert_eq!(article.writer, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // The server attaches an id; the client does not keep it.
        let article: Article = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "T",
            "content": "C",
            "writer": null,
            "likeCount": 0,
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(article.title, "T");
    }

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let patch = ArticlePatch {
            title: Some("New".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "New" }));
    }

    #[test]
    fn test_create_params_send_exactly_three_fields() {
        let params = ArticleCreateParams {
            title: "T".to_string(),
            content: "C".to_string(),
            image: "I".to_string(),
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "title": "T", "content": "C", "image": "I" })
        );
    }
}
