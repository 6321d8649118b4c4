// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing::info;

use crate::config::settings::SourceSettings;
use crate::domain::models::element_query::ElementQuery;
use crate::domain::models::result_table::ResultTable;
use crate::domain::services::document_loader::load;
use crate::domain::services::element_locator::{attr_of, locate, locate_all, text_of};
use crate::engines::traits::HttpSession;
use crate::utils::errors::ParserError;
use crate::utils::progress::row_progress;
use crate::utils::url_utils::{parse_url, resolve_url};

/// 收集“What's New”各版本文章
///
/// 每行：文章链接、标题（`h1`）、编辑/作者信息（第一个 `dl`，换行替换为空格）
pub async fn whats_new<S>(session: &S, sources: &SourceSettings) -> Result<ResultTable, ParserError>
where
    S: HttpSession + ?Sized,
{
    let main_url = parse_url(&sources.main_doc_url)?;
    let whats_new_url = resolve_url(&main_url, &sources.whats_new_path)?;

    let links = {
        let doc = load(session, whats_new_url.as_str()).await?;
        let wrapper = locate(
            &doc,
            &ElementQuery::tag("div").with_attr("class", "toctree-wrapper"),
        )?;
        locate_all(wrapper, &ElementQuery::tag("li").with_attr("class", "toctree-l1"))
            .into_iter()
            .map(|section| {
                let anchor = locate(section, &ElementQuery::tag("a"))?;
                resolve_url(&whats_new_url, attr_of(anchor, "href")?)
            })
            .collect::<Result<Vec<_>, _>>()?
    };
    info!(sections = links.len(), "What's New sections found");

    let mut results = ResultTable::new(["Link to article", "Title", "Editor, Author"]);
    let progress = row_progress(links.len(), "whats-new");
    for link in links {
        let doc = load(session, link.as_str()).await?;
        let h1 = locate(&doc, &ElementQuery::tag("h1"))?;
        let dl = locate(&doc, &ElementQuery::tag("dl"))?;
        results.push([
            link.to_string(),
            text_of(h1),
            text_of(dl).replace('\n', " "),
        ]);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(results)
}
