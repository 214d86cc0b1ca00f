use std::collections::BTreeSet;
use std::net::SocketAddr;

use super::*;

fn config(cors_permissive: bool) -> ServerConfig {
    ServerConfig { host: [127, 0, 0, 1].into(), port: 0, cors_permissive }
}

/// Serve `router` on an ephemeral local port.
async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    addr
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_health_check() {
    let addr = spawn(base_routes(&config(false))).await;
    let response = reqwest::get(format!("http://{addr}/healthz")).await.expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn permissive_cors_adds_allow_origin() {
    let addr = spawn(base_routes(&config(true))).await;
    let response = reqwest::Client::new()
        .get(format!("http://{addr}/healthz"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .expect("request");
    assert_eq!(response.headers().get("access-control-allow-origin").expect("cors header"), "*");
}

#[tokio::test]
async fn unknown_path_is_not_found_without_leptos() {
    let addr = spawn(base_routes(&config(false))).await;
    let response = reqwest::get(format!("http://{addr}/nope")).await.expect("request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================
// Leptos route tree vs. gate route table
// =============================================================

/// Router path in the route table's syntax: `:name` params, no trailing slash.
fn table_syntax(path: &str) -> String {
    let mut out = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => {
                out.push(':');
                out.push_str(name.trim_start_matches('*'));
            }
            None => out.push_str(segment),
        }
    }
    if out.is_empty() { "/".to_owned() } else { out }
}

#[test]
fn table_syntax_normalizes_router_paths() {
    assert_eq!(table_syntax(""), "/");
    assert_eq!(table_syntax("/farmer/"), "/farmer");
    assert_eq!(table_syntax("/farmer/article/{articleId}"), "/farmer/article/:articleId");
    assert_eq!(table_syntax("/buyer/product/:productId"), "/buyer/product/:productId");
}

#[tokio::test]
async fn leptos_routes_match_route_table() {
    let mounted: BTreeSet<String> =
        generate_route_list(client::app::App).iter().map(|listing| table_syntax(listing.path())).collect();
    let declared: BTreeSet<String> = gate::RouteTable::standard().paths().into_iter().collect();
    let only_mounted: Vec<_> = mounted.difference(&declared).collect();
    let only_declared: Vec<_> = declared.difference(&mounted).collect();
    assert!(
        only_mounted.is_empty() && only_declared.is_empty(),
        "route trees drifted; only in leptos: {only_mounted:?}, only in gate: {only_declared:?}"
    );
}
