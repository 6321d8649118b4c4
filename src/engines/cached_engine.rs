// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use tracing::warn;

use crate::engines::traits::{EngineError, HttpSession, SessionResponse};
use crate::infrastructure::cache::response_cache::ResponseCache;
use crate::utils::errors::CacheError;

/// 带响应缓存的会话
///
/// 包装任意 [`HttpSession`]，命中时不再访问内部会话。
/// 缓存读写失败只记录警告，不影响抓取结果。
pub struct CachedSession<S> {
    inner: S,
    cache: ResponseCache,
}

impl<S: HttpSession> CachedSession<S> {
    pub fn new(inner: S, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }

    /// 清空缓存
    pub async fn clear(&self) -> Result<(), CacheError> {
        self.cache.clear().await
    }
}

#[async_trait]
impl<S: HttpSession> HttpSession for CachedSession<S> {
    async fn get(&self, url: &str) -> Result<Option<SessionResponse>, EngineError> {
        match self.cache.get(url).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => warn!(url, error = %e, "Cache read failed, fetching"),
        }

        let response = self.inner.get(url).await?;

        // Only successful responses are cached
        if let Some(resp) = &response {
            if resp.is_success() {
                if let Err(e) = self.cache.put(url, resp).await {
                    warn!(url, error = %e, "Cache write failed");
                }
            }
        }

        Ok(response)
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}
