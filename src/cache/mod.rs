// 缓存模块
// 包含会话用户缓存的数据结构和两种存储实现

pub mod keys;
pub mod models;
pub mod operations;

use std::time::Duration;

use thiserror::Error;

use crate::config::{CacheBackendKind, Config};

pub use models::user::CachedUser;
pub use operations::{LocalUserCache, RedisUserCache};

/// 缓存存储故障（未命中不属于错误）
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache store error: {0}")]
    Store(#[from] redis::RedisError),
    #[error("cache store timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to encode cached user: {0}")]
    Encode(#[source] serde_json::Error),
}

/// 会话用户缓存，启动时根据配置选择具体实现
#[derive(Clone)]
pub enum UserCache {
    /// 单实例：进程内 DashMap
    Local(LocalUserCache),
    /// 多实例：Redis
    Redis(RedisUserCache),
}

impl UserCache {
    pub fn from_config(config: &Config) -> Result<Self, CacheError> {
        match config.cache_backend {
            CacheBackendKind::Memory => {
                tracing::info!("Using in-process user cache");
                Ok(UserCache::Local(LocalUserCache::new(config.user_cache_ttl())))
            }
            CacheBackendKind::Redis => {
                tracing::info!("Using Redis user cache at {}", config.redis_url);
                Ok(UserCache::Redis(
                    RedisUserCache::open(&config.redis_url)?
                        .with_timeout(config.redis_timeout())
                        .with_default_ttl(config.user_cache_ttl_secs),
                ))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            UserCache::Local(_) => "memory",
            UserCache::Redis(_) => "redis",
        }
    }

    /// 新写入条目的有效期
    pub fn ttl(&self) -> Duration {
        match self {
            UserCache::Local(cache) => cache.ttl(),
            UserCache::Redis(cache) => Duration::from_secs(cache.default_ttl_secs()),
        }
    }

    pub async fn get(&self, token: &str) -> Result<Option<CachedUser>, CacheError> {
        match self {
            UserCache::Local(cache) => Ok(cache.get(token)),
            UserCache::Redis(cache) => cache.get(token).await,
        }
    }

    /// 使用各实现的默认有效期写入
    pub async fn set(&self, token: &str, user: &CachedUser) -> Result<(), CacheError> {
        match self {
            UserCache::Local(cache) => {
                cache.set(token, user.clone());
                Ok(())
            }
            UserCache::Redis(cache) => cache.set(token, user).await,
        }
    }
}

impl From<LocalUserCache> for UserCache {
    fn from(cache: LocalUserCache) -> Self {
        UserCache::Local(cache)
    }
}

impl From<RedisUserCache> for UserCache {
    fn from(cache: RedisUserCache) -> Self {
        UserCache::Redis(cache)
    }
}
