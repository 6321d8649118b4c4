// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::config::settings::SourceSettings;
use crate::domain::models::element_query::ElementQuery;
use crate::domain::services::document_loader::load;
use crate::domain::services::element_locator::{attr_of, locate};
use crate::domain::services::page_fetcher::fetch;
use crate::engines::traits::HttpSession;
use crate::infrastructure::storage::LocalStorage;
use crate::utils::errors::ParserError;
use crate::utils::url_utils::{last_path_segment, parse_url, resolve_url};

static PDF_A4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r".+pdf-a4\.zip$").expect("archive pattern is a valid regex"));

/// 下载 A4 版 PDF 文档归档
///
/// 文件名取自归档URL的最后一段路径，保存到 `storage` 目录下；
/// 目录不存在时自动创建，同名文件直接覆盖。返回写入的路径。
pub async fn download<S>(
    session: &S,
    sources: &SourceSettings,
    storage: &LocalStorage,
) -> Result<PathBuf, ParserError>
where
    S: HttpSession + ?Sized,
{
    let main_url = parse_url(&sources.main_doc_url)?;
    let downloads_url = resolve_url(&main_url, &sources.download_path)?;

    let archive_query = ElementQuery::tag("a").with_pattern("href", PDF_A4_PATTERN.clone());
    let archive_url = {
        let doc = load(session, downloads_url.as_str()).await?;
        let table = locate(
            &doc,
            &ElementQuery::tag("table").with_attr("class", "docutils"),
        )?;
        let anchor = locate(table, &archive_query)?;
        resolve_url(&downloads_url, attr_of(anchor, "href")?)?
    };

    // The pattern may match inside a query string, leaving no file name
    let file_name = last_path_segment(&archive_url).to_string();
    if file_name.is_empty() {
        return Err(ParserError::not_found(&archive_query));
    }

    let response = fetch(session, archive_url.as_str()).await?;
    let archive_path = storage.save(&file_name, &response.content).await?;

    info!(path = %archive_path.display(), "Archive downloaded and saved");
    Ok(archive_path)
}
