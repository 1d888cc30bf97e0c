use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

/// Port used when the PORT environment variable is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Same answer for every method and path, the hosting platform only looks at
/// the status code
async fn running() -> &'static str {
    "Bot is running\n"
}

pub fn router() -> Router {
    Router::new().fallback(running)
}

/// Serve the liveness endpoint until the process exits
pub async fn serve(port: u16) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind the health responder on port {port}"))?;
    info!("Health responder is listening on port {port}");
    axum::serve(listener, router())
        .await
        .context("Health responder stopped unexpectedly")
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    async fn send(method: Method, uri: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn answers_200_on_the_root_path() {
        let (status, body) = send(Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Bot is running\n");
    }

    #[tokio::test]
    async fn answers_200_on_any_path_and_method() {
        let (status, body) = send(Method::POST, "/some/arbitrary/path").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Bot is running\n");
    }
}
