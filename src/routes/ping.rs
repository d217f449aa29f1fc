use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::AppState;
use crate::utils::success_to_api_response;

/// Ping响应
#[derive(Serialize)]
pub struct PingResponse {
    /// 服务状态
    pub status: String,
    /// 当前使用的用户缓存
    pub user_cache: &'static str,
    /// 用户缓存有效期（秒）
    pub user_cache_ttl_secs: u64,
    /// 服务器时间
    pub timestamp: i64,
}

/// 健康检查接口
pub async fn ping(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let cache = state.sessions.resolver().cache();

    (
        StatusCode::OK,
        success_to_api_response(PingResponse {
            status: "ok".to_string(),
            user_cache: cache.backend_name(),
            user_cache_ttl_secs: cache.ttl().as_secs(),
            timestamp: now.timestamp(),
        }),
    )
}
