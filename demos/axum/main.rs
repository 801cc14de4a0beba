use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use origin_cors_rs::constants::header;
use origin_cors_rs::{Cors, CorsConfig, CorsOptions, Headers, preflight_action};
use tracing_subscriber::EnvFilter;

const CORS_OPTIONS: &str = r#"{
    "allowOrigins": ["http://localhost:*", "https://*.example.com"],
    "allowMethods": ["GET", "POST"],
    "exposeHeaders": ["X-Example-Trace"]
}"#;

#[derive(Clone)]
struct AppState {
    cors: Arc<CorsConfig>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let options = CorsOptions::from_json_str(CORS_OPTIONS).expect("valid CORS configuration");
    let state = AppState {
        cors: Arc::new(CorsConfig::from_options(&options)),
    };

    let app = Router::new()
        .route("/greet", get(greet))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            cors_middleware,
        ))
        .with_state(state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!(%addr, "axum CORS demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}

async fn greet() -> impl IntoResponse {
    Html("<h1>Hello</h1><p>Call this endpoint from another origin to see CORS in action.</p>")
}

async fn cors_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let metadata = origin_metadata(request.headers());
    let cors = Cors::with_config(&metadata, state.cors.as_ref().clone());
    let headers = cors.headers();

    if preflight_action(request.method().as_str()).should_halt() {
        let mut response = Response::builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::empty())
            .unwrap();
        apply_headers(response.headers_mut(), &headers);
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &headers);
    response
}

fn origin_metadata(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(|origin| HashMap::from([(header::ORIGIN.to_string(), origin.to_string())]))
        .unwrap_or_default()
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}
