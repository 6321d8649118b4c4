// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与文件系统的交互。
///
/// 包含的子模块：
/// - 缓存（cache）：以URL为键的磁盘响应缓存
/// - 存储（storage）：下载归档与结果文件的本地写入
pub mod cache;
pub mod storage;
