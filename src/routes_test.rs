use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn temp_site_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("snipzo-routes-{name}-{}", std::process::id()));
    std::fs::create_dir_all(root.join("pkg")).expect("create pkg dir");
    root
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).expect("request");
    router.oneshot(request).await.expect("response").status()
}

#[tokio::test]
async fn healthz_is_ok() {
    let root = temp_site_root("healthz");
    assert_eq!(status_of(static_routes(&root), "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn serves_files_from_pkg() {
    let root = temp_site_root("pkg");
    std::fs::write(root.join("pkg").join("snipzo.css"), "body {}").expect("write asset");
    assert_eq!(status_of(static_routes(&root), "/pkg/snipzo.css").await, StatusCode::OK);
    assert_eq!(status_of(static_routes(&root), "/pkg/missing.js").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let root = temp_site_root("fallback");
    assert_eq!(status_of(static_routes(&root), "/nope").await, StatusCode::NOT_FOUND);
}
