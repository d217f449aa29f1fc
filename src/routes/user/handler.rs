use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;

use crate::{
    AppState,
    cache::CachedUser,
    error::AppError,
    session::SESSION_COOKIE,
    utils::{ApiResponse, success_to_api_response},
};

/// 当前会话用户
pub async fn get_me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<CachedUser>>, AppError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty());

    match state.sessions.current_user(token).await {
        Some(user) => Ok(success_to_api_response(user)),
        None => Err(AppError::Unauthorized),
    }
}
