// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use clap::ValueEnum;
use tracing::{error, info};

use crate::application::use_cases::{download, latest_versions, pep_audit, whats_new};
use crate::config::settings::Settings;
use crate::domain::models::pep_status::ExpectedStatusMap;
use crate::domain::models::result_table::ResultTable;
use crate::engines::traits::HttpSession;
use crate::infrastructure::storage::LocalStorage;
use crate::utils::errors::ParserError;

/// 解析模式，每种模式对应一个提取例程
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ParserMode {
    WhatsNew,
    LatestVersions,
    Download,
    Pep,
}

impl ParserMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserMode::WhatsNew => "whats-new",
            ParserMode::LatestVersions => "latest-versions",
            ParserMode::Download => "download",
            ParserMode::Pep => "pep",
        }
    }
}

impl fmt::Display for ParserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 执行所选模式
///
/// 返回 `Ok(None)` 表示该模式没有表格输出（下载）。
pub async fn run_mode<S>(
    mode: ParserMode,
    session: &S,
    settings: &Settings,
    expected: &ExpectedStatusMap,
) -> Result<Option<ResultTable>, ParserError>
where
    S: HttpSession + ?Sized,
{
    info!(mode = %mode, "Running parser mode");
    let sources = &settings.sources;

    match mode {
        ParserMode::WhatsNew => whats_new::whats_new(session, sources).await.map(Some),
        ParserMode::LatestVersions => latest_versions::latest_versions(session, sources)
            .await
            .map(Some),
        ParserMode::Download => {
            let storage = LocalStorage::new(&settings.storage.downloads_dir);
            download::download(session, sources, &storage).await?;
            Ok(None)
        }
        ParserMode::Pep => pep_audit::pep(session, sources, expected).await.map(Some),
    }
}

/// 顶层错误策略
///
/// 缺少必需元素时记录错误并视为“无结果”；其余错误原样返回，由调用方报告。
pub fn recover_missing_element(
    result: Result<Option<ResultTable>, ParserError>,
) -> Result<Option<ResultTable>, ParserError> {
    match result {
        Err(e) if e.is_element_not_found() => {
            error!("{}", e);
            Ok(None)
        }
        other => other,
    }
}
