// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::settings::SourceSettings;
use crate::domain::models::element_query::ElementQuery;
use crate::domain::models::result_table::ResultTable;
use crate::domain::services::document_loader::load;
use crate::domain::services::element_locator::{attr_of, locate, locate_all, text_of};
use crate::engines::traits::HttpSession;
use crate::utils::errors::ParserError;

/// 侧边栏中版本列表的标记文本
pub const ALL_VERSIONS_MARKER: &str = "All versions";

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)")
        .expect("version pattern is a valid regex")
});

/// 拆分 `Python X.Y (status)` 形式的文本
///
/// 不匹配时原样返回全文和空状态。
pub fn split_version_status(text: &str) -> (String, String) {
    match VERSION_PATTERN.captures(text) {
        Some(caps) => (caps["version"].to_string(), caps["status"].to_string()),
        None => (text.to_string(), String::new()),
    }
}

/// 收集侧边栏中的文档版本及其状态
///
/// 依次检查侧边栏中的每个 `ul`，第一个文本包含 “All versions” 的列表胜出；
/// 全部检查完仍未找到时返回 `ElementNotFound`。
pub async fn latest_versions<S>(
    session: &S,
    sources: &SourceSettings,
) -> Result<ResultTable, ParserError>
where
    S: HttpSession + ?Sized,
{
    let doc = load(session, &sources.main_doc_url).await?;
    let sidebar = locate(
        &doc,
        &ElementQuery::tag("div").with_attr("class", "sphinxsidebarwrapper"),
    )?;

    let versions = locate_all(sidebar, &ElementQuery::tag("ul"))
        .into_iter()
        .find(|ul| text_of(*ul).contains(ALL_VERSIONS_MARKER))
        .ok_or_else(|| ParserError::not_found(&ElementQuery::text(ALL_VERSIONS_MARKER)))?;

    let mut results = ResultTable::new(["Link to documentation", "Version", "Status"]);
    for anchor in locate_all(versions, &ElementQuery::tag("a")) {
        let link = attr_of(anchor, "href")?;
        let (version, status) = split_version_status(&text_of(anchor));
        results.push([link.to_string(), version, status]);
    }

    Ok(results)
}
