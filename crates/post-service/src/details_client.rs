//! Outbound client for the post-details service.
//!
//! The target address is resolved through the service registry at call
//! time; the HTTP client itself is a plain `reqwest::Client` with
//! framework defaults (no timeout, no retry).

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use common::registry::ServiceRegistry;
use common::CoreError;

/// Logical name the details service is registered under.
pub const POST_DETAILS_SERVICE: &str = "post-details-service";

/// Remote detail payload, passed through to the caller verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailsView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub body: String,
    pub post_id: i64,
}

#[derive(Clone)]
pub struct DetailsClient {
    http: reqwest::Client,
    registry: Arc<ServiceRegistry>,
}

impl DetailsClient {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { http: reqwest::Client::new(), registry }
    }

    /// Fetch the detail record linked to the given post id.
    pub async fn fetch_by_post_id(&self, post_id: i64) -> Result<PostDetailsView, CoreError> {
        let base = self.registry.resolve(POST_DETAILS_SERVICE)?;
        let url = format!("{}/api/post-details/{}", base.trim_end_matches('/'), post_id);
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(CoreError::RemoteStatus(resp.status().as_u16()));
        }
        resp.json::<PostDetailsView>()
            .await
            .map_err(|e| CoreError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Path;
    use axum::{routing::get, Json, Router};
    use tokio::net::TcpListener;

    async fn spawn_stub(router: Router) -> String {
        let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: String) -> DetailsClient {
        let mut registry = ServiceRegistry::new();
        registry.register(POST_DETAILS_SERVICE, base_url);
        DetailsClient::new(Arc::new(registry))
    }

    #[tokio::test]
    async fn fetches_and_decodes_detail_payload() {
        let router = Router::new().route(
            "/api/post-details/:id",
            get(|Path(id): Path<i64>| async move {
                Json(serde_json::json!({
                    "id": 1, "title": "t", "description": "d", "body": "b", "postId": id
                }))
            }),
        );
        let client = client_for(spawn_stub(router).await);

        let view = client.fetch_by_post_id(9).await.expect("fetch");
        assert_eq!(view.post_id, 9);
        assert_eq!(view.title, "t");
    }

    #[tokio::test]
    async fn remote_404_maps_to_status_error() {
        let client = client_for(spawn_stub(Router::new()).await);
        let err = client.fetch_by_post_id(1).await.unwrap_err();
        assert!(matches!(err, CoreError::RemoteStatus(404)));
    }

    #[tokio::test]
    async fn unregistered_service_fails_before_any_call() {
        let client = DetailsClient::new(Arc::new(ServiceRegistry::new()));
        let err = client.fetch_by_post_id(1).await.unwrap_err();
        assert!(matches!(err, CoreError::Unregistered(_)));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_parse_error() {
        let router = Router::new().route(
            "/api/post-details/:id",
            get(|| async { Json(serde_json::json!({"unexpected": true})) }),
        );
        let client = client_for(spawn_stub(router).await);
        let err = client.fetch_by_post_id(1).await.unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }
}
