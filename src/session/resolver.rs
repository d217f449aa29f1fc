use crate::cache::{CacheError, CachedUser, UserCache};

/// 会话解析器
///
/// 只读查找：未命中时不会请求后端，也不会回填缓存。
#[derive(Clone)]
pub struct SessionResolver {
    cache: UserCache,
}

impl SessionResolver {
    pub fn new(cache: UserCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &UserCache {
        &self.cache
    }

    pub async fn resolve(&self, token: Option<&str>) -> Result<Option<CachedUser>, CacheError> {
        let Some(token) = token else {
            return Ok(None);
        };

        let cached = self.cache.get(token).await?;
        match &cached {
            Some(user) => tracing::debug!("session cache hit for user {}", user.id),
            None => tracing::debug!("session cache miss"),
        }
        Ok(cached)
    }
}
