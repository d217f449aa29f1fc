#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

pub const VALID_TOKEN: &str = "sess-123";

/// 模拟后端 `/users/me`，记录调用次数
#[derive(Clone, Default)]
pub struct StubBackend {
    pub hits: Arc<AtomicUsize>,
}

impl StubBackend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn users_me(State(stub): State<StubBackend>, headers: HeaderMap) -> Response {
    stub.hits.fetch_add(1, Ordering::SeqCst);

    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if cookie == format!("access_token={}", VALID_TOKEN) {
        Json(json!({
            "id": 1,
            "email": "a@b.com",
            "first_name": "Ana",
            "last_name": "Petrova"
        }))
        .into_response()
    } else if cookie == "access_token=sess-garbage" {
        (StatusCode::OK, "<html>not json</html>").into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Not authenticated"}))).into_response()
    }
}

/// 在随机端口启动模拟后端，返回其地址
pub async fn spawn_backend() -> (String, StubBackend) {
    let stub = StubBackend::default();
    let app = Router::new()
        .route("/users/me", get(users_me))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

pub fn backend_timeout() -> Duration {
    Duration::from_secs(5)
}
