/// 缓存操作
/// 提供两种可互换的会话用户缓存实现

// 进程内缓存
pub mod local;

// Redis 共享缓存
pub mod shared;

pub use local::{LOCAL_USER_TTL, LocalUserCache};
pub use shared::{DEFAULT_USER_TTL_SECS, RedisUserCache};
