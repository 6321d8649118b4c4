// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::borrow::Cow;

use encoding_rs::UTF_8;
use tracing::warn;

/// 强制按 UTF-8 解码响应体
///
/// 文档站点始终以 UTF-8 编码页面，但有时不声明 charset，
/// 因此忽略服务器声明的编码。非法字节序列替换为 U+FFFD。
pub fn decode_utf8(input: &[u8]) -> Cow<'_, str> {
    let (decoded, had_errors) = UTF_8.decode_without_bom_handling(input);
    if had_errors {
        warn!("响应体包含非法的 UTF-8 字节序列，已替换");
    }
    decoded
}
