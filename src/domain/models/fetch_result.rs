// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::borrow::Cow;

use bytes::Bytes;

use crate::utils::text_encoding::decode_utf8;

/// 单次请求的抓取结果
///
/// 文本始终按 UTF-8 解码；原始字节保留给二进制下载使用。
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub url: String,
    pub status_code: u16,
    pub content: Bytes,
}

impl FetchResult {
    /// 响应文本
    pub fn body(&self) -> Cow<'_, str> {
        decode_utf8(&self.content)
    }
}
