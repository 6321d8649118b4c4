// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 命令行参数解析与结果输出
pub mod cli;
pub mod output;
