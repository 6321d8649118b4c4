// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含解析流水线的核心逻辑，包括：
/// - 领域模型（models）：抓取结果、元素查询、结果表和状态统计
/// - 服务（services）：抓取、加载、定位与状态核对
///
/// 领域层只依赖 `HttpSession` 抽象，不关心具体的 HTTP 实现和缓存。
pub mod models;
pub mod services;
