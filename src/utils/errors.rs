// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::models::element_query::ElementQuery;
use crate::engines::traits::EngineError;

/// 解析器错误类型
///
/// 所有提取例程共享同一组错误，任何一种都会中止当前例程，不做重试
#[derive(Error, Debug)]
pub enum ParserError {
    /// 网络或协议层面的请求失败
    #[error("Failed to load page {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: EngineError,
    },

    /// 会话没有返回响应对象
    #[error("Empty server response for {url}")]
    EmptyResponse { url: String },

    /// 文档中缺少必需的元素
    #[error("Tag not found: {query}")]
    ElementNotFound { query: ElementQuery },

    /// 汇总表中的状态码在期望状态映射中不存在
    #[error("Unknown status code {code:?} for {link}")]
    UnknownStatusCode { code: String, link: String },

    /// 链接无法解析为绝对URL
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// 文件系统错误
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ParserError {
    pub fn not_found(query: &ElementQuery) -> Self {
        ParserError::ElementNotFound {
            query: query.clone(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ParserError::Io {
            path: path.into(),
            source,
        }
    }

    /// 判断是否属于“元素未找到”类错误
    ///
    /// 顶层驱动只捕获这一类错误，其余错误会终止进程
    pub fn is_element_not_found(&self) -> bool {
        matches!(self, ParserError::ElementNotFound { .. })
    }
}

/// 响应缓存错误类型
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupted cache entry {key}: {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
