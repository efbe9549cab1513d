//! HTTP transport for both services. Maps requests to store operations.
//!
//! Uses axum for routing. Every router built here goes through
//! [`with_service_layers`], which adds the `/health` route, a JSON 404
//! fallback, request tracing and the permissive CORS policy.
//!
//! ## Example
//!
//! ```ignore
//! let store = user_order_services::user_service::new();
//! let app = user_order_services::http::users::router(store);
//! axum::serve(listener, app).await?;
//! ```

pub mod cors;
pub mod orders;
pub mod users;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde::de::DeserializeOwned;
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Decode a JSON request body.
///
/// The body is read in full before decoding and no `Content-Type` is required.
/// Only the first JSON value is read; anything after it is ignored.
/// On failure the decoder's message is returned as-is.
pub fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, String> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => value.map_err(|e| e.to_string()),
        None => Err("EOF while parsing a value".to_string()),
    }
}

/// Adds the routes and layers shared by every service.
pub fn with_service_layers(router: Router, service: &'static str) -> Router {
    router
        .route("/health", get(move || health(service)))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(cors::cors))
}

/// `GET /health` returns `{ "status": "healthy", "service": "<name>" }`.
async fn health(service: &'static str) -> impl IntoResponse {
    Json(json!({ "status": "healthy", "service": service }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Request, Response};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
        let body = body.map(|b| Body::from(b.to_owned())).unwrap_or_else(Body::empty);
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    pub async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }
}
