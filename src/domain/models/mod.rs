// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了解析流水线的核心数据结构，包括：
/// - 抓取结果（fetch_result）：单次请求的响应体，固定 UTF-8 解码
/// - 元素查询（element_query）：标签/文本加属性过滤条件
/// - 结果表（result_table）：提取例程输出的定宽表格
/// - PEP 状态（pep_status）：期望状态映射、统计与不一致记录
pub mod element_query;
pub mod fetch_result;
pub mod pep_status;
pub mod result_table;
