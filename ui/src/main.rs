use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    api_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProxyResponse {
    status: u16,
    body: serde_json::Value,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_url = std::env::var("SEARCH_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let api_key = std::env::var("MY_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        tracing::warn!("MY_API_KEY is not set; searches will be rejected by the API");
    }
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
        .parse()?;

    let state = AppState {
        api_url: normalize_base_url(&api_url),
        api_key,
        client: reqwest::Client::new(),
    };

    tracing::info!("UI listening on {}", bind_addr);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app(state)).await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/results", get(results))
        .route("/api/search", get(api_search))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

async fn results() -> Html<&'static str> {
    Html(include_str!("results.html"))
}

/// Forwards a query to the search API. Upstream failures surface as 502 with
/// the upstream status and body attached.
async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<(StatusCode, Json<ProxyResponse>), (StatusCode, String)> {
    let query = params.q.unwrap_or_default();

    if let Err(message) = validate_query(&query) {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ProxyResponse {
                status: StatusCode::BAD_REQUEST.as_u16(),
                body: json!({ "error": message }),
            }),
        ));
    }

    let resp = state
        .client
        .post(format!("{}/api/clothing-search", state.api_url))
        .header("x-api-key", &state.api_key)
        .json(&SearchRequest { query: &query })
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Search request failed: {}", e);
            (StatusCode::BAD_GATEWAY, e.to_string())
        })?;

    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| json!({ "error": "invalid JSON from search API" }));

    if !status.is_success() {
        tracing::warn!("Search API returned {}", status);
        return Ok((
            StatusCode::BAD_GATEWAY,
            Json(ProxyResponse {
                status: status.as_u16(),
                body,
            }),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ProxyResponse {
            status: status.as_u16(),
            body,
        }),
    ))
}

fn validate_query(query: &str) -> Result<(), &'static str> {
    if query.trim().is_empty() {
        return Err("Please enter a search query");
    }
    if query.chars().count() < 2 {
        return Err("Search query must be at least 2 characters long");
    }
    Ok(())
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;
    use axum::routing::post;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // ============================================================================
    // Stub search API
    // ============================================================================

    #[derive(Clone, Default)]
    struct Seen {
        calls: Arc<AtomicUsize>,
        api_key: Arc<Mutex<Option<String>>>,
        query: Arc<Mutex<Option<String>>>,
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// A search API that records what it received and answers with `status`/`body`.
    async fn stub_api(status: StatusCode, body: serde_json::Value) -> (String, Seen) {
        let seen = Seen::default();
        let recorder = seen.clone();

        let router = Router::new().route(
            "/api/clothing-search",
            post(move |headers: HeaderMap, Json(req): Json<serde_json::Value>| {
                let recorder = recorder.clone();
                let body = body.clone();
                async move {
                    recorder.calls.fetch_add(1, Ordering::SeqCst);
                    *recorder.api_key.lock().unwrap() = headers
                        .get("x-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *recorder.query.lock().unwrap() =
                        req["query"].as_str().map(str::to_string);
                    (status, Json(body))
                }
            }),
        );

        (serve(router).await, seen)
    }

    async fn spawn_ui(api_url: &str) -> String {
        serve(app(AppState {
            api_url: normalize_base_url(api_url),
            api_key: "test-key".to_string(),
            client: reqwest::Client::new(),
        }))
        .await
    }

    async fn search(ui: &str, q: &str) -> (StatusCode, serde_json::Value) {
        let resp = reqwest::Client::new()
            .get(format!("{}/api/search", ui))
            .query(&[("q", q)])
            .send()
            .await
            .unwrap();
        let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
        let body = resp.json().await.unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    // ============================================================================
    // Proxy
    // ============================================================================

    #[tokio::test]
    async fn test_search_forwards_key_and_query() {
        let (api, seen) = stub_api(StatusCode::OK, json!([])).await;
        let ui = spawn_ui(&api).await;

        let (status, body) = search(&ui, "blue shorts").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": 200, "body": [] }));
        assert_eq!(seen.calls.load(Ordering::SeqCst), 1);
        assert_eq!(seen.api_key.lock().unwrap().as_deref(), Some("test-key"));
        assert_eq!(seen.query.lock().unwrap().as_deref(), Some("blue shorts"));
    }

    #[tokio::test]
    async fn test_search_keeps_item_order() {
        let items = json!([
            { "name": "Blue Shorts", "price": 49.99, "color": "Blue" },
            { "name": "Khaki Shorts", "price": 42.0 },
            { "name": "Denim Shorts", "price": 55.0 }
        ]);
        let (api, _seen) = stub_api(StatusCode::OK, items.clone()).await;
        let ui = spawn_ui(&api).await;

        let (status, body) = search(&ui, "shorts").await;

        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body["body"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Blue Shorts", "Khaki Shorts", "Denim Shorts"]);
        assert_eq!(body["body"], items);
    }

    #[tokio::test]
    async fn test_upstream_rejection_is_502() {
        let (api, seen) = stub_api(
            StatusCode::UNAUTHORIZED,
            json!({ "error": "API key is required" }),
        )
        .await;
        let ui = spawn_ui(&api).await;

        let (status, body) = search(&ui, "shorts").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["status"], 401);
        assert_eq!(seen.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_502() {
        // Grab a free port and release it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let ui = spawn_ui(&format!("http://{}", addr)).await;
        let (status, _) = search(&ui, "shorts").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_invalid_query_never_reaches_api() {
        let (api, seen) = stub_api(StatusCode::OK, json!([])).await;
        let ui = spawn_ui(&api).await;

        let (status, body) = search(&ui, "a").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["body"]["error"],
            "Search query must be at least 2 characters long"
        );

        let (status, _) = search(&ui, "   ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert_eq!(seen.calls.load(Ordering::SeqCst), 0);
    }

    // ============================================================================
    // Pages
    // ============================================================================

    #[tokio::test]
    async fn test_pages_are_served() {
        let ui = spawn_ui("http://127.0.0.1:1").await;
        let client = reqwest::Client::new();

        let index = client.get(format!("{}/", ui)).send().await.unwrap();
        assert!(index.status().is_success());
        assert!(index.text().await.unwrap().contains("searchForm"));

        let results = client
            .get(format!("{}/results?q=shorts", ui))
            .send()
            .await
            .unwrap();
        assert!(results.status().is_success());
        let page = results.text().await.unwrap();
        assert!(page.contains("/api/search?q="));
        assert!(page.contains("Back to Search"));
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    #[test]
    fn test_validate_query() {
        assert_eq!(validate_query(""), Err("Please enter a search query"));
        assert_eq!(validate_query("   "), Err("Please enter a search query"));
        assert_eq!(
            validate_query("a"),
            Err("Search query must be at least 2 characters long")
        );
        assert!(validate_query("ab").is_ok());
        assert!(validate_query("blue shorts").is_ok());
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("localhost:5000/"), "http://localhost:5000");
        assert_eq!(
            normalize_base_url(" https://api.example.com// "),
            "https://api.example.com"
        );
    }
}
