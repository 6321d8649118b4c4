// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;

use crate::domain::services::page_fetcher::fetch;
use crate::engines::traits::HttpSession;
use crate::utils::errors::ParserError;

/// 抓取页面并解析为 HTML 文档
///
/// 抓取错误原样向上传递。解析器是容错的，畸形 HTML 会得到尽力而为的文档树。
pub async fn load<S>(session: &S, url: &str) -> Result<Html, ParserError>
where
    S: HttpSession + ?Sized,
{
    let result = fetch(session, url).await?;
    Ok(Html::parse_document(&result.body()))
}
