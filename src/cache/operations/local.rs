use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use crate::cache::models::user::CachedUser;

/// 进程内缓存默认有效期（30分钟）
pub const LOCAL_USER_TTL: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    user: CachedUser,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// 进程内会话用户缓存
///
/// 过期条目在读取时惰性删除，没有后台清理任务。
#[derive(Debug, Clone)]
pub struct LocalUserCache {
    entries: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for LocalUserCache {
    fn default() -> Self {
        Self::new(LOCAL_USER_TTL)
    }
}

impl LocalUserCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// 读取缓存用户，已过期的条目会被删除并视为不存在
    pub fn get(&self, token: &str) -> Option<CachedUser> {
        let now = Instant::now();

        if self
            .entries
            .remove_if(token, |_, entry| entry.is_expired_at(now))
            .is_some()
        {
            tracing::debug!("local user cache entry expired");
            return None;
        }

        self.entries
            .get(token)
            .filter(|entry| !entry.is_expired_at(now))
            .map(|entry| entry.user.clone())
    }

    /// 写入缓存用户，覆盖同一令牌的旧条目
    pub fn set(&self, token: &str, user: CachedUser) {
        let Some(expires_at) = Instant::now().checked_add(self.ttl) else {
            tracing::warn!("local user cache ttl {:?} out of range, not caching", self.ttl);
            return;
        };
        self.entries
            .insert(token.to_string(), CacheEntry { user, expires_at });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
