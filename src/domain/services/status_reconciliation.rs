// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use tracing::{debug, info};
use url::Url;

use crate::domain::models::element_query::ElementQuery;
use crate::domain::models::pep_status::{ExpectedStatusMap, Mismatch, StatusTally, TableRow};
use crate::domain::services::document_loader::load;
use crate::domain::services::element_locator::{
    attr_of, locate, locate_all, next_sibling_element, text_of,
};
use crate::engines::traits::HttpSession;
use crate::utils::errors::ParserError;
use crate::utils::progress::row_progress;
use crate::utils::url_utils::resolve_url;

/// 解析 PEP 汇总表
///
/// 第一列文本去掉首字符（类型标记）后是状态码，第三列中的链接是详情页。
pub fn parse_summary_table(doc: &Html, base_url: &Url) -> Result<Vec<TableRow>, ParserError> {
    let index = locate(
        doc,
        &ElementQuery::tag("section").with_attr("id", "numerical-index"),
    )?;
    let table = locate(
        index,
        &ElementQuery::tag("table").with_attr("class", "pep-zero-table docutils align-default"),
    )?;
    let body = locate(table, &ElementQuery::tag("tbody"))?;

    let td = ElementQuery::tag("td");
    locate_all(body, &ElementQuery::tag("tr"))
        .into_iter()
        .map(|row| {
            let cells = locate_all(row, &td);
            let (Some(type_status), Some(number_cell)) = (cells.first(), cells.get(2)) else {
                return Err(ParserError::not_found(&td));
            };

            let declared_status_code = text_of(*type_status).chars().skip(1).collect();
            let anchor = locate(*number_cell, &ElementQuery::tag("a"))?;
            let detail_link = resolve_url(base_url, attr_of(anchor, "href")?)?.to_string();

            Ok(TableRow {
                declared_status_code,
                detail_link,
            })
        })
        .collect()
}

/// 从 PEP 详情页读取权威状态
pub fn parse_detail_status(doc: &Html) -> Result<String, ParserError> {
    let overview = locate(
        doc,
        &ElementQuery::tag("dl").with_attr("class", "rfc2822 field-list simple"),
    )?;
    let label = locate(overview, &ElementQuery::text("Status"))?;
    let value = next_sibling_element(label, "dd")?;
    Ok(text_of(value))
}

/// 状态核对引擎
///
/// 逐行、按表格顺序抓取详情页，统计权威状态并收集不一致记录。
/// 任一行的抓取或定位失败都会中止整个核对。
pub struct StatusReconciler<'a, S: ?Sized> {
    session: &'a S,
    expected: &'a ExpectedStatusMap,
}

impl<'a, S> StatusReconciler<'a, S>
where
    S: HttpSession + ?Sized,
{
    pub fn new(session: &'a S, expected: &'a ExpectedStatusMap) -> Self {
        Self { session, expected }
    }

    /// 核对 PEP 索引页上的全部 PEP
    pub async fn reconcile(&self, index_url: &Url) -> Result<StatusTally, ParserError> {
        let rows = {
            let doc = load(self.session, index_url.as_str()).await?;
            parse_summary_table(&doc, index_url)?
        };
        info!(rows = rows.len(), "PEP summary table loaded");

        let mut tally = StatusTally::new();
        let progress = row_progress(rows.len(), "pep");
        for row in &rows {
            let status = self.fetch_status(&row.detail_link).await?;
            self.apply(&mut tally, row, &status)?;
            progress.inc(1);
        }
        progress.finish_and_clear();

        for mismatch in tally.mismatches() {
            info!(
                link = %mismatch.link,
                expected = ?mismatch.expected,
                actual = %mismatch.actual,
                "Mismatched statuses"
            );
        }

        Ok(tally)
    }

    async fn fetch_status(&self, link: &str) -> Result<String, ParserError> {
        let doc = load(self.session, link).await?;
        let status = parse_detail_status(&doc)?;
        debug!(link, status = %status, "PEP status read");
        Ok(status)
    }

    /// 记录一行的结果
    ///
    /// 状态码在映射中不存在时返回 `UnknownStatusCode`，此时统计不变。
    pub fn apply(
        &self,
        tally: &mut StatusTally,
        row: &TableRow,
        status: &str,
    ) -> Result<(), ParserError> {
        let expected = self
            .expected
            .expected_for(&row.declared_status_code)
            .ok_or_else(|| ParserError::UnknownStatusCode {
                code: row.declared_status_code.clone(),
                link: row.detail_link.clone(),
            })?;

        tally.record(status);
        if !expected.contains(status) {
            tally.record_mismatch(Mismatch {
                link: row.detail_link.clone(),
                expected: expected.clone(),
                actual: status.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "status_reconciliation_test.rs"]
mod tests;
