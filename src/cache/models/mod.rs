/// 缓存数据模型
// 会话用户缓存模型
pub mod user;

pub use user::CachedUser;
