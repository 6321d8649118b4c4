// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SourceSettings;
use crate::domain::models::pep_status::ExpectedStatusMap;
use crate::domain::models::result_table::ResultTable;
use crate::domain::services::status_reconciliation::StatusReconciler;
use crate::engines::traits::HttpSession;
use crate::utils::errors::ParserError;
use crate::utils::url_utils::parse_url;

/// PEP 状态审计
///
/// 返回 `Status / Amount` 表，最后一行是 `Total`。不一致记录已由核对引擎写入日志。
pub async fn pep<S>(
    session: &S,
    sources: &SourceSettings,
    expected: &ExpectedStatusMap,
) -> Result<ResultTable, ParserError>
where
    S: HttpSession + ?Sized,
{
    let index_url = parse_url(&sources.pep_doc_url)?;
    let tally = StatusReconciler::new(session, expected)
        .reconcile(&index_url)
        .await?;
    Ok(tally.to_table())
}
