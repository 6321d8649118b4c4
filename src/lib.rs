// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 各解析模式的用例实现
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心数据模型与页面抓取、元素定位、状态核对等服务
pub mod domain;

/// 引擎模块
///
/// HTTP 会话实现及其缓存装饰器
pub mod engines;

/// 基础设施模块
///
/// 提供响应缓存和本地文件存储
pub mod infrastructure;

/// 表示层模块
///
/// 命令行参数与结果输出
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
