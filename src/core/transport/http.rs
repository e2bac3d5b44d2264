//! HTTP transport implementation.
//!
//! REST endpoints with JSON bodies. Tool endpoints always answer with a
//! [`ToolOutcome`] envelope; the status code is 400 for invalid arguments,
//! 404 for unknown tools and 200 otherwise, including delegate failures.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::Gateway;
use crate::core::server::{HealthReport, ToolCatalog};
use crate::domains::tools::{ToolError, ToolInvocation, ToolOutcome, ToolRegistry};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Build the router serving `gateway`.
    pub fn router(&self, gateway: Gateway) -> Router {
        let mut app = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_check))
            .route("/tools/list", get(list_tools))
            .route("/tools/call", post(call_tool))
            .route("/search", post(search))
            .route("/fetch", post(fetch))
            .with_state(gateway)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, gateway: Gateway) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(gateway);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("Available tools: {:?}", ToolRegistry::tool_names());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(TransportError::Serve)?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Turn a dispatch result into a status code and envelope.
fn envelope(result: Result<String, ToolError>) -> (StatusCode, Json<ToolOutcome>) {
    let status = match &result {
        Err(ToolError::NotFound(_)) => StatusCode::NOT_FOUND,
        Err(ToolError::InvalidArguments(_)) => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };
    (status, Json(ToolOutcome::from_result(&result)))
}

/// Root handler - provides service metadata.
async fn root_handler(State(gateway): State<Gateway>) -> Json<Value> {
    Json(gateway.info())
}

/// Health check endpoint.
async fn health_check(State(gateway): State<Gateway>) -> Json<HealthReport> {
    Json(gateway.health())
}

async fn list_tools(State(gateway): State<Gateway>) -> Json<ToolCatalog> {
    Json(gateway.list_tools())
}

async fn call_tool(
    State(gateway): State<Gateway>,
    Json(invocation): Json<ToolInvocation>,
) -> (StatusCode, Json<ToolOutcome>) {
    envelope(gateway.call_tool(&invocation).await)
}

/// Direct search. The body is validated exactly like `search` tool arguments.
async fn search(
    State(gateway): State<Gateway>,
    Json(arguments): Json<Map<String, Value>>,
) -> (StatusCode, Json<ToolOutcome>) {
    envelope(gateway.search(&arguments).await)
}

/// Direct fetch. The body is validated exactly like `fetch_content` tool arguments.
async fn fetch(
    State(gateway): State<Gateway>,
    Json(arguments): Json<Map<String, Value>>,
) -> (StatusCode, Json<ToolOutcome>) {
    envelope(gateway.fetch_content(&arguments).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::delegate::testing::ScriptedDelegate;
    use axum::{
        body::Body,
        http::{Request, header},
    };
    use chrono::{DateTime, Utc};
    use http_body_util::BodyExt;
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(delegate: ScriptedDelegate) -> Router {
        let gateway = Gateway::with_delegate(Config::default(), Arc::new(delegate));
        HttpTransport::new(HttpConfig::default()).router(gateway)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn assert_timestamp_after(body: &Value, arrival: DateTime<Utc>) {
        let stamp = body["timestamp"].as_str().expect("timestamp present");
        let stamp = DateTime::parse_from_rfc3339(stamp)
            .expect("RFC 3339 timestamp")
            .with_timezone(&Utc);
        assert!(stamp >= arrival, "{stamp} < {arrival}");
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) =
            send(app(ScriptedDelegate::failing("down")), get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["tools"], json!(["search", "fetch_content"]));
    }

    #[tokio::test]
    async fn test_tools_list() {
        let (status, body) =
            send(app(ScriptedDelegate::succeeding()), get_req("/tools/list")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let tools = body["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0]["name"], "search");
        assert_eq!(tools[0]["parameters"]["required"], json!(["query"]));
        assert_eq!(tools[1]["name"], "fetch_content");
        assert_eq!(tools[1]["parameters"]["required"], json!(["url"]));
    }

    #[tokio::test]
    async fn test_root_metadata() {
        let (status, body) = send(app(ScriptedDelegate::succeeding()), get_req("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["endpoints"]["fetch"], "/fetch");
        assert_eq!(body["tools"], json!(["search", "fetch_content"]));
    }

    #[tokio::test]
    async fn test_call_search_success() {
        let arrival = Utc::now();
        let (status, body) = send(
            app(ScriptedDelegate::succeeding()),
            post_json(
                "/tools/call",
                json!({ "name": "search", "arguments": { "query": "cats" } }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"], "Found 10 results for 'cats'");
        assert!(body["error"].is_null());
        assert_timestamp_after(&body, arrival);
    }

    #[tokio::test]
    async fn test_call_search_delegate_failure() {
        let arrival = Utc::now();
        let (status, body) = send(
            app(ScriptedDelegate::failing("connection reset")),
            post_json(
                "/tools/call",
                json!({ "name": "search", "arguments": { "query": "cats" } }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["result"].is_null());
        assert_eq!(body["error"], "connection reset");
        assert_timestamp_after(&body, arrival);
    }

    #[tokio::test]
    async fn test_call_search_missing_query() {
        let (status, body) = send(
            app(ScriptedDelegate::succeeding()),
            post_json("/tools/call", json!({ "name": "search", "arguments": {} })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["result"].is_null());
        assert!(body["error"].as_str().unwrap().contains("'query'"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_call_fetch_missing_url() {
        let (status, body) = send(
            app(ScriptedDelegate::succeeding()),
            post_json(
                "/tools/call",
                json!({ "name": "fetch_content", "arguments": { "url": "" } }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("'url'"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let (status, body) = send(
            app(ScriptedDelegate::succeeding()),
            post_json("/tools/call", json!({ "name": "bogus" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("bogus"));
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_search_endpoint_matches_tool_call() {
        let delegates: [fn() -> ScriptedDelegate; 2] = [ScriptedDelegate::succeeding, || {
            ScriptedDelegate::failing("rate limited")
        }];
        for delegate in delegates {
            let (direct_status, direct) = send(
                app(delegate()),
                post_json("/search", json!({ "query": "cats", "max_results": 3 })),
            )
            .await;
            let (tool_status, via_tool) = send(
                app(delegate()),
                post_json(
                    "/tools/call",
                    json!({ "name": "search", "arguments": { "query": "cats", "max_results": 3 } }),
                ),
            )
            .await;

            assert_eq!(direct_status, tool_status);
            assert_eq!(direct["success"], via_tool["success"]);
            assert_eq!(direct["result"], via_tool["result"]);
            assert_eq!(direct["error"], via_tool["error"]);
        }
    }

    #[tokio::test]
    async fn test_direct_endpoints_reject_bad_arguments_like_tool_call() {
        let cases = [
            ("/search", "search", json!({ "max_results": 3 }), "'query'"),
            ("/search", "search", json!({ "query": "" }), "'query'"),
            (
                "/search",
                "search",
                json!({ "query": "cats", "max_results": -1 }),
                "'max_results'",
            ),
            (
                "/search",
                "search",
                json!({ "query": "cats", "max_results": "three" }),
                "'max_results'",
            ),
            ("/search", "search", json!({ "query": 42 }), "'query'"),
            ("/fetch", "fetch_content", json!({}), "'url'"),
            ("/fetch", "fetch_content", json!({ "url": null }), "'url'"),
        ];

        for (path, tool, arguments, field) in cases {
            let (direct_status, direct) = send(
                app(ScriptedDelegate::succeeding()),
                post_json(path, arguments.clone()),
            )
            .await;
            let (tool_status, via_tool) = send(
                app(ScriptedDelegate::succeeding()),
                post_json("/tools/call", json!({ "name": tool, "arguments": arguments })),
            )
            .await;

            assert_eq!(direct_status, StatusCode::BAD_REQUEST, "{path} {arguments}");
            assert_eq!(tool_status, StatusCode::BAD_REQUEST, "{tool} {arguments}");
            assert_eq!(direct["success"], false);
            assert!(direct["result"].is_null());
            assert!(direct["timestamp"].is_string());
            assert!(
                direct["error"].as_str().unwrap().contains(field),
                "{path} {arguments}: {direct}"
            );
            assert_eq!(direct["error"], via_tool["error"]);
        }
    }

    #[tokio::test]
    async fn test_fetch_endpoint() {
        let arrival = Utc::now();
        let (status, body) = send(
            app(ScriptedDelegate::succeeding()),
            post_json("/fetch", json!({ "url": "https://example.com" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"], "Content of https://example.com");
        assert_timestamp_after(&body, arrival);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::get("/health")
            .header(header::ORIGIN, "http://chatbot.local")
            .body(Body::empty())
            .unwrap();
        let response = app(ScriptedDelegate::succeeding())
            .oneshot(request)
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
