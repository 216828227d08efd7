//! Basic example demonstrating the Panda Market API client.
//!
//! Run with:
//! ```
//! cargo run --example basic
//! ```

use panda_market::{
    create_article, create_product, list_articles, list_products, Article, ArticleCreateParams,
    ListQuery, MarketClient, ProductCreateParams, DEFAULT_BASE_URL,
};

#[tokio::main]
async fn main() -> panda_market::Result<()> {
    // Initialize tracing so sentinel-wrapper failures show up on stderr
    tracing_subscriber::fmt::init();

    println!("Connecting to: {DEFAULT_BASE_URL}");
    let client = MarketClient::new(DEFAULT_BASE_URL)?;

    // List first page of products, classified into variants
    println!("\n--- Listing Products (first page) ---");
    let mut products = list_products(&client, &ListQuery::for_page(1, 5)).await;
    println!("Found {} products", products.len());

    for variant in &products {
        match variant.manufacturer() {
            Some(manufacturer) => {
                println!(
                    "  [electronics] {} - manufacturer: {}",
                    variant.product().name,
                    manufacturer
                );
            }
            None => println!("  {}", variant.product().name),
        }
    }

    // Create a product tagged as electronic
    println!("\n--- Creating a Product ---");
    let created = create_product(
        &client,
        ProductCreateParams {
            name: "Test Product".to_string(),
            description: "Test description".to_string(),
            price: 10000.0,
            tags: vec!["test".to_string(), "electronics".to_string()],
            images: vec!["https://img.example/1.jpg".to_string()],
        },
    )
    .await;
    println!("Created product: {created:?}");

    // favorite() is a pure in-memory mutation; nothing is persisted
    if let Some(first) = products.first_mut() {
        first.favorite();
        println!(
            "\nfavorite() on '{}': favorite count is now {}",
            first.product().name,
            first.product().favorite_count
        );
    }

    // List first page of articles
    println!("\n--- Listing Articles (first page) ---");
    let mut articles = list_articles(&client, &ListQuery::for_page(1, 5)).await;
    println!("Found {} articles", articles.len());

    if let Some(article) = articles.first_mut() {
        let writer = article.writer.clone().unwrap_or_else(|| "anonymous".to_string());
        article.like();
        println!("  '{}' by {}", article.title, writer);
        println!("  like() -> like count is now {}", article.like_count);
        println!("  created at: {}", article.created_at.to_rfc3339());
    }

    // Create an article
    println!("\n--- Creating an Article ---");
    let created = create_article(
        &client,
        ArticleCreateParams {
            title: "API creation test".to_string(),
            content: "Test content".to_string(),
            image: "https://img.example/test.jpg".to_string(),
        },
    )
    .await;
    match created {
        Some(Article { title, content, .. }) => {
            println!("Created article: '{title}' - {content}");
        }
        None => println!("Article creation failed (see logs)"),
    }

    println!("\nDone!");
    Ok(())
}
