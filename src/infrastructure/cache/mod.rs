// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 缓存模块
///
/// 提供HTTP响应缓存的实现
pub mod response_cache;
