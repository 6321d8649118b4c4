// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info};

use crate::engines::traits::SessionResponse;
use crate::utils::errors::CacheError;

/// 缓存条目元数据
#[derive(Debug, Serialize, Deserialize)]
struct CachedMeta {
    url: String,
    status_code: u16,
    content_type: Option<String>,
}

/// 磁盘响应缓存
///
/// 以请求URL的 SHA-256 为键，每个条目由 `<key>.json`（元数据）
/// 和 `<key>.bin`（响应体）两个文件组成。
pub struct ResponseCache {
    base_path: PathBuf,
}

impl ResponseCache {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn key_for(url: &str) -> String {
        hex::encode(Sha256::digest(url.as_bytes()))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }

    fn body_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.bin"))
    }

    /// 读取缓存条目，未命中返回 `Ok(None)`
    pub async fn get(&self, url: &str) -> Result<Option<SessionResponse>, CacheError> {
        let key = Self::key_for(url);
        let meta_path = self.meta_path(&key);

        let raw_meta = match fs::read(&meta_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Io {
                    path: meta_path,
                    source,
                })
            }
        };
        let meta: CachedMeta = serde_json::from_slice(&raw_meta)
            .map_err(|source| CacheError::Corrupted {
                key: key.clone(),
                source,
            })?;

        let body_path = self.body_path(&key);
        let body = match fs::read(&body_path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CacheError::Io {
                    path: body_path,
                    source,
                })
            }
        };

        debug!(url, key = %key, "Cache hit");
        Ok(Some(SessionResponse {
            url: meta.url,
            status_code: meta.status_code,
            content_type: meta.content_type,
            body: Bytes::from(body),
        }))
    }

    /// 写入缓存条目
    pub async fn put(&self, url: &str, response: &SessionResponse) -> Result<(), CacheError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|source| CacheError::Io {
                path: self.base_path.clone(),
                source,
            })?;

        let key = Self::key_for(url);
        let meta = CachedMeta {
            url: response.url.clone(),
            status_code: response.status_code,
            content_type: response.content_type.clone(),
        };
        let raw_meta = serde_json::to_vec(&meta).map_err(|source| CacheError::Corrupted {
            key: key.clone(),
            source,
        })?;

        // Body first: a meta file without its body reads as a miss
        let body_path = self.body_path(&key);
        fs::write(&body_path, &response.body)
            .await
            .map_err(|source| CacheError::Io {
                path: body_path,
                source,
            })?;
        let meta_path = self.meta_path(&key);
        fs::write(&meta_path, raw_meta)
            .await
            .map_err(|source| CacheError::Io {
                path: meta_path,
                source,
            })?;

        Ok(())
    }

    /// 清空缓存
    pub async fn clear(&self) -> Result<(), CacheError> {
        match fs::remove_dir_all(&self.base_path).await {
            Ok(()) => {
                info!(path = %self.base_path.display(), "Response cache cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Io {
                path: self.base_path.clone(),
                source,
            }),
        }
    }
}
