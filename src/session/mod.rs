// 会话模块
// 根据会话令牌解析当前用户

mod resolver;
mod service;

pub use resolver::SessionResolver;
pub use service::SessionService;

/// 后端签发的会话 Cookie 名称
pub const SESSION_COOKIE: &str = "access_token";
