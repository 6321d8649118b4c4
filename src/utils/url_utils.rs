// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

use crate::utils::errors::ParserError;

/// 解析入口URL
pub fn parse_url(raw: &str) -> Result<Url, ParserError> {
    Url::parse(raw).map_err(|source| ParserError::InvalidUrl {
        url: raw.to_string(),
        source,
    })
}

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParserError> {
    base_url.join(path).map_err(|source| ParserError::InvalidUrl {
        url: path.to_string(),
        source,
    })
}

/// URL 路径的最后一段，用作下载文件名
pub fn last_path_segment(url: &Url) -> &str {
    url.path().rsplit('/').next().unwrap_or_default()
}
