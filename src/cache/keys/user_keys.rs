/// 会话用户缓存键前缀
pub const USER_SESSION_PREFIX: &str = "user:";

/// 生成会话用户缓存键，令牌原样拼接
pub fn user_session_key(token: &str) -> String {
    format!("{}{}", USER_SESSION_PREFIX, token)
}
