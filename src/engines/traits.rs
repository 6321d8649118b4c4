// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误（测试桩使用）
    #[cfg(test)]
    #[error("Other error: {0}")]
    Other(String),
}

/// 会话响应
#[derive(Debug, Clone)]
pub struct SessionResponse {
    /// 最终URL（跟随重定向之后）
    pub url: String,
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型
    pub content_type: Option<String>,
    /// 原始响应体
    pub body: Bytes,
}

impl SessionResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// HTTP 会话特质
///
/// 对应一个可复用的客户端会话。`Ok(None)` 表示会话没有产生响应对象。
#[async_trait]
pub trait HttpSession: Send + Sync {
    /// 执行 GET 请求
    async fn get(&self, url: &str) -> Result<Option<SessionResponse>, EngineError>;

    /// 会话名称
    fn name(&self) -> &'static str;
}

