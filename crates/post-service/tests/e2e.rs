use std::net::SocketAddr;
use std::sync::Arc;

use migration::MigratorTrait;
use post_service::details_client::{DetailsClient, POST_DETAILS_SERVICE};
use post_service::routes::{self, ServerState};
use reqwest::StatusCode as HttpStatusCode;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::json;
use service::post::{repository::SeaOrmPostRepository, service::PostService};
use service::post_details::{repository::SeaOrmPostDetailsRepository, service::PostDetailsService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use common::registry::ServiceRegistry;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn fresh_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:".to_owned());
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn serve(app: axum::Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(base_url)
}

/// Boot a details service instance with its own store.
async fn start_details_service() -> anyhow::Result<String> {
    let db = fresh_db().await?;
    let details = Arc::new(PostDetailsService::new(Arc::new(SeaOrmPostDetailsRepository { db })));
    let app = post_details_service::routes::build_router(
        cors(),
        post_details_service::routes::ServerState { details },
    );
    serve(app).await
}

/// Boot a post service wired to the given details service address.
async fn start_post_service(details_base_url: &str) -> anyhow::Result<String> {
    let db = fresh_db().await?;
    let mut registry = ServiceRegistry::new();
    registry.register(POST_DETAILS_SERVICE, details_base_url);

    let posts = Arc::new(PostService::new(Arc::new(SeaOrmPostRepository { db })));
    let state = ServerState {
        posts,
        details: DetailsClient::new(Arc::new(registry)),
    };
    serve(routes::build_router(cors(), state)).await
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let details_url = start_details_service().await?;
    let post_url = start_post_service(&details_url).await?;
    let res = reqwest::get(format!("{}/health", post_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_create_post_assigns_id_and_echoes_title() -> anyhow::Result<()> {
    let details_url = start_details_service().await?;
    let post_url = start_post_service(&details_url).await?;
    let c = reqwest::Client::new();

    let title = format!("post_{}", Uuid::new_v4());
    let res = c
        .post(format!("{}/api/post", post_url))
        .json(&json!({"title": title}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let created = res.json::<serde_json::Value>().await?;
    assert!(created["id"].as_i64().unwrap() > 0);
    assert_eq!(created["title"], title.as_str());

    let res = c.get(format!("{}/api/post", post_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let posts = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(posts.len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_read_post_joins_detail_record() -> anyhow::Result<()> {
    let details_url = start_details_service().await?;
    let post_url = start_post_service(&details_url).await?;
    let c = reqwest::Client::new();

    // The detail record is created against the sibling service directly
    let res = c
        .post(format!("{}/api/post-details", details_url))
        .json(&json!({
            "title": "joined title",
            "description": "joined description",
            "body": "joined body",
            "postId": 42
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // Reading the post by id fans out to the details service
    let res = c.get(format!("{}/api/post/42", post_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["title"], "joined title");
    assert_eq!(body["description"], "joined description");
    assert_eq!(body["body"], "joined body");
    assert_eq!(body["postId"], 42);
    Ok(())
}

#[tokio::test]
async fn e2e_read_post_without_details_is_404() -> anyhow::Result<()> {
    let details_url = start_details_service().await?;
    let post_url = start_post_service(&details_url).await?;

    let res = reqwest::get(format!("{}/api/post/999", post_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Not Found");
    Ok(())
}

#[tokio::test]
async fn e2e_unreachable_details_service_is_502() -> anyhow::Result<()> {
    // Point the registry at an address nothing listens on
    let post_url = start_post_service("http://127.0.0.1:9").await?;

    let res = reqwest::get(format!("{}/api/post/1", post_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_GATEWAY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "Detail Fetch Failed");
    Ok(())
}
