use axum::{Router, routing::get};

use crate::{AppState, middleware::log_errors, routes};

// 会话相关的路由
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(routes::ping::ping))
        .route("/users/me", get(routes::user::get_me))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .nest(&state.config.api_base_uri, session_routes())
        .layer(axum::middleware::from_fn(log_errors));

    // 根据编译模式决定是否添加CORS
    #[cfg(debug_assertions)]
    let router = router.layer(tower_http::cors::CorsLayer::permissive());

    router.with_state(state)
}
