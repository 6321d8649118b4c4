// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::{debug, warn};

use crate::domain::models::fetch_result::FetchResult;
use crate::engines::traits::HttpSession;
use crate::utils::errors::ParserError;

/// 抓取页面
///
/// 只尝试一次，重试策略由调用方决定。非 2xx 状态码不视为错误，
/// 缺失的元素会在定位阶段暴露出来。
///
/// # 错误
///
/// * `ParserError::Transport` - 会话返回网络/协议错误
/// * `ParserError::EmptyResponse` - 会话没有返回响应对象
///
/// 空响应体不是错误：它解析为空文档，缺失的元素随后由定位阶段报告。
pub async fn fetch<S>(session: &S, url: &str) -> Result<FetchResult, ParserError>
where
    S: HttpSession + ?Sized,
{
    debug!(url, session = session.name(), "Fetching page");

    let response = session
        .get(url)
        .await
        .map_err(|source| ParserError::Transport {
            url: url.to_string(),
            source,
        })?
        .ok_or_else(|| ParserError::EmptyResponse {
            url: url.to_string(),
        })?;

    if !response.is_success() {
        warn!(url, status_code = response.status_code, "Non-success HTTP status");
    }

    Ok(FetchResult {
        url: response.url,
        status_code: response.status_code,
        content: response.body,
    })
}
