use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::registry::ServiceRegistry;
use common::utils::logging::init_logging_from_env;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::details_client::{DetailsClient, POST_DETAILS_SERVICE};
use crate::routes::{self, ServerState};
use service::post::{repository::SeaOrmPostRepository, service::PostService};

const DEFAULT_CONFIG: &str = "config/post.toml";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_DETAILS_URL: &str = "http://127.0.0.1:8082";

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_from_env();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load settings from the config file, falling back to env vars when the
/// file is absent. The database URL may still come from `DATABASE_URL`.
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate(DEFAULT_CONFIG) {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            cfg.server.host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            cfg.server.port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            cfg.database.normalize_from_env();
            cfg.registry
                .services
                .insert(POST_DETAILS_SERVICE.to_string(), DEFAULT_DETAILS_URL.to_string());
            cfg
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();

    let db = if cfg.database.url.trim().is_empty() {
        models::db::connect().await?
    } else {
        models::db::connect_with(&cfg.database).await?
    };
    migration::Migrator::up(&db, None).await?;

    let registry = Arc::new(ServiceRegistry::from_entries(&cfg.registry.services));
    let posts = Arc::new(PostService::new(Arc::new(SeaOrmPostRepository { db })));
    let state = ServerState {
        posts,
        details: DetailsClient::new(registry),
    };

    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting post-service");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
