/// 缓存键模块
/// 提供缓存键生成函数

// 用户会话缓存键
pub mod user_keys;

pub use user_keys::{USER_SESSION_PREFIX, user_session_key};
