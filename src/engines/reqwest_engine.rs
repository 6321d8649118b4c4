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

use crate::config::settings::HttpSettings;
use crate::engines::traits::{EngineError, HttpSession, SessionResponse};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;

/// 基于reqwest实现的HTTP会话
///
/// 整个运行期间复用同一个客户端（连接池与cookie共享），
/// 每个请求只尝试一次。
pub struct ReqwestSession {
    client: reqwest::Client,
}

impl ReqwestSession {
    /// 根据配置创建会话
    pub fn new(settings: &HttpSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSession for ReqwestSession {
    /// 执行HTTP GET
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(SessionResponse))` - 任意状态码的响应
    /// * `Err(EngineError)` - 连接、TLS、超时等传输层错误
    async fn get(&self, url: &str) -> Result<Option<SessionResponse>, EngineError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.bytes().await?;

        debug!(
            url,
            status_code,
            bytes = body.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "GET completed"
        );

        Ok(Some(SessionResponse {
            url: final_url,
            status_code,
            content_type,
            body,
        }))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
