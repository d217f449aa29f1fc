use crate::cache::{CachedUser, UserCache};
use crate::infrastructure::BackendClient;

use super::resolver::SessionResolver;

/// 服务端渲染时获取当前用户
///
/// 先查缓存，未命中或缓存不可用时请求后端，并把结果写回缓存。
#[derive(Clone)]
pub struct SessionService {
    resolver: SessionResolver,
    backend: BackendClient,
}

impl SessionService {
    pub fn new(cache: UserCache, backend: BackendClient) -> Self {
        Self {
            resolver: SessionResolver::new(cache),
            backend,
        }
    }

    pub fn resolver(&self) -> &SessionResolver {
        &self.resolver
    }

    pub async fn current_user(&self, token: Option<&str>) -> Option<CachedUser> {
        let token = token?;

        match self.resolver.resolve(Some(token)).await {
            Ok(Some(user)) => return Some(user),
            Ok(None) => {}
            Err(e) => tracing::warn!("user cache unavailable, falling back to backend: {}", e),
        }

        let user = match self.backend.fetch_current_user(token).await {
            Ok(Some(user)) => user,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("fetch current user failed: {}", e);
                return None;
            }
        };

        if let Err(e) = self.resolver.cache().set(token, &user).await {
            tracing::warn!("failed to cache user {}: {}", user.id, e);
        }

        Some(user)
    }
}
