// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 页面抓取（page_fetcher）：单次 GET，失败即返回类型化错误
/// - 文档加载（document_loader）：抓取并解析为 HTML 文档树
/// - 元素定位（element_locator）：必需元素缺失时立即报错
/// - 状态核对（status_reconciliation）：汇总表与详情页的状态交叉验证
pub mod document_loader;
pub mod element_locator;
pub mod page_fetcher;
pub mod status_reconciliation;
