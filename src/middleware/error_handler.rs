use axum::{
    body::{Body, to_bytes},
    http::{Request, header},
    middleware::Next,
    response::Response,
};
use tracing::error;

/// 日志中记录的响应体最大字节数
const MAX_LOGGED_BODY: usize = 4096;

/// 记录所有 5xx 响应，日志中的响应体截断到 `MAX_LOGGED_BODY`，返回给客户端的响应体不变
pub async fn log_errors(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let response = next.run(req).await;

    if !response.status().is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            error!(%method, %uri, status = %parts.status, "failed to read error response body: {}", e);
            parts.headers.remove(header::CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let logged = &bytes[..bytes.len().min(MAX_LOGGED_BODY)];
    error!(
        %method,
        %uri,
        status = %parts.status,
        body = %String::from_utf8_lossy(logged),
        truncated = bytes.len() > MAX_LOGGED_BODY,
        "server error"
    );

    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(bytes))
}
