use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use redis::{AsyncCommands, Client as RedisClient};

use crate::cache::CacheError;
use crate::cache::keys::user_keys;
use crate::cache::models::user::CachedUser;

/// Redis 写入默认有效期（秒）
pub const DEFAULT_USER_TTL_SECS: u64 = 1800;

/// 默认单次 Redis 调用超时
pub const DEFAULT_REDIS_TIMEOUT: Duration = Duration::from_millis(500);

/// 多实例共享的会话用户缓存（Redis）
///
/// 过期由 Redis 的 `SETEX` 负责，读取时不做客户端过期判断。
/// 连接和命令错误原样返回给调用方，只有反序列化失败才按未命中处理。
#[derive(Clone)]
pub struct RedisUserCache {
    redis: Arc<RedisClient>,
    timeout: Duration,
    default_ttl_secs: u64,
}

impl RedisUserCache {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self {
            redis,
            timeout: DEFAULT_REDIS_TIMEOUT,
            default_ttl_secs: DEFAULT_USER_TTL_SECS,
        }
    }

    pub fn open(redis_url: &str) -> Result<Self, CacheError> {
        let client = RedisClient::open(redis_url)?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_default_ttl(mut self, ttl_secs: u64) -> Self {
        self.default_ttl_secs = ttl_secs;
        self
    }

    pub fn default_ttl_secs(&self) -> u64 {
        self.default_ttl_secs
    }

    /// 从 Redis 获取会话用户
    pub async fn get(&self, token: &str) -> Result<Option<CachedUser>, CacheError> {
        let key = user_keys::user_session_key(token);

        let raw: Option<Vec<u8>> = self
            .bounded(async {
                let mut conn = self.redis.get_multiplexed_async_connection().await?;
                let raw: Option<Vec<u8>> = conn.get(&key).await?;
                Ok::<_, redis::RedisError>(raw)
            })
            .await?;

        Ok(raw.and_then(|bytes| decode_user(&bytes)))
    }

    /// 使用默认有效期写入会话用户
    pub async fn set(&self, token: &str, user: &CachedUser) -> Result<(), CacheError> {
        self.set_with_ttl(token, user, self.default_ttl_secs).await
    }

    /// 写入会话用户，过期时间由 Redis 执行
    pub async fn set_with_ttl(
        &self,
        token: &str,
        user: &CachedUser,
        ttl_secs: u64,
    ) -> Result<(), CacheError> {
        let key = user_keys::user_session_key(token);
        let json = serde_json::to_string(user).map_err(CacheError::Encode)?;

        self.bounded(async {
            let mut conn = self.redis.get_multiplexed_async_connection().await?;
            let _: () = conn.set_ex(&key, json, ttl_secs).await?;
            Ok::<_, redis::RedisError>(())
        })
        .await
    }

    async fn bounded<T, F>(&self, op: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, redis::RedisError>>,
    {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(CacheError::Timeout(self.timeout)),
        }
    }
}

/// 解析缓存值，损坏或外来数据视为未命中
pub(crate) fn decode_user(bytes: &[u8]) -> Option<CachedUser> {
    match serde_json::from_slice::<CachedUser>(bytes) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!("discarding unreadable cached user: {}", e);
            None
        }
    }
}
