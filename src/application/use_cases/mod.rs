// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 每个用例对应一种解析模式，负责抓取页面并组装结果表
pub mod download;
pub mod latest_versions;
pub mod mode;
pub mod pep_audit;
pub mod whats_new;
