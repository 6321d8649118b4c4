// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 将领域服务编排为命令行可选的各个解析模式
pub mod use_cases;
