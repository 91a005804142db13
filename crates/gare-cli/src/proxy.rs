//! Pass-through proxy for the rail data API.
//!
//! The web front end cannot hold the API key, so it talks to this proxy
//! instead. Every request under `/api/` is forwarded to the upstream base URL
//! with the same method, sub-path, query and body; the configured key is
//! injected as the `Authorization` header. Upstream status, headers and body
//! come back untouched, error statuses and redirects included. Request and
//! response bodies are streamed in both directions.

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use log::{debug, error, info, warn};
use tokio::{
    net::TcpListener,
    signal::unix::{signal, SignalKind},
};

/// Connection-scoped headers that must not cross the proxy.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Proxy configuration assembled from CLI flags or environment.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub listen: SocketAddr,
    /// Base URL requests are forwarded to, e.g. `https://api.sncf.com/v1`.
    pub upstream: String,
    pub api_key: String,
}

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    upstream: Arc<str>,
    authorization: HeaderValue,
}

/// Upstream could not be reached, or the exchange broke before it answered.
#[derive(Debug)]
struct UpstreamError(reqwest::Error);

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        error!("Upstream request failed: {}", self.0);
        (StatusCode::BAD_GATEWAY, "Rail API unreachable").into_response()
    }
}

/// Builds the proxy router for `config`.
pub fn build_router(config: &ProxyConfig) -> Result<Router> {
    let mut authorization =
        HeaderValue::from_str(&config.api_key).context("API key is not a valid header value")?;
    authorization.set_sensitive(true);

    // 3xx answers go back to the caller as is.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .context("Failed to build HTTP client")?;

    let state = ProxyState {
        client,
        upstream: config.upstream.trim_end_matches('/').into(),
        authorization,
    };

    Ok(Router::new()
        .route("/health", get(health))
        .route("/api/*path", any(forward))
        .with_state(state))
}

/// Binds `config.listen` and serves until SIGINT or SIGTERM.
pub async fn run_server(config: ProxyConfig) -> Result<()> {
    let app = build_router(&config)?;
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;

    info!(
        "Proxy listening on {}, forwarding to {}",
        listener.local_addr()?,
        config.upstream
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Proxy server error")?;

    info!("Proxy shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let (Ok(mut sigint), Ok(mut sigterm)) = (
        signal(SignalKind::interrupt()),
        signal(SignalKind::terminate()),
    ) else {
        warn!("Signal handlers unavailable; the proxy only stops when killed");
        return std::future::pending::<()>().await;
    };

    tokio::select! {
        _ = sigint.recv() => info!("Received SIGINT, shutting down gracefully..."),
        _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully..."),
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn forward(
    State(state): State<ProxyState>,
    request: Request,
) -> Result<Response, UpstreamError> {
    let (parts, body) = request.into_parts();
    let target = upstream_url(&state.upstream, &parts.uri);

    let mut headers = forwardable_headers(&parts.headers);
    headers.remove(header::HOST);
    headers.insert(header::AUTHORIZATION, state.authorization.clone());

    debug!("Forwarding {} {}", parts.method, target);
    let mut outgoing = state.client.request(parts.method, &target).headers(headers);
    if has_body(&parts.headers) {
        outgoing = outgoing.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }
    let upstream = outgoing
        .send()
        .await
        .map_err(UpstreamError)?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    debug!("Upstream answered {status} for {target}");

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

/// Maps `/api/<rest>?<query>` onto `<upstream>/<rest>?<query>`.
fn upstream_url(upstream: &str, uri: &axum::http::Uri) -> String {
    let path = uri.path();
    let rest = path.strip_prefix("/api").unwrap_or(path);
    match uri.query() {
        Some(query) => format!("{upstream}{rest}?{query}"),
        None => format!("{upstream}{rest}"),
    }
}

/// Whether the caller framed a request body. Bodiless requests stay bodiless
/// upstream instead of turning into an empty chunked stream.
fn has_body(headers: &HeaderMap) -> bool {
    headers.contains_key(header::TRANSFER_ENCODING)
        || headers
            .get(header::CONTENT_LENGTH)
            .is_some_and(|len| len != "0")
}

fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !HOP_BY_HOP.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
