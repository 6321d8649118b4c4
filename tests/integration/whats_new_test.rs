// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{whats_new_article, whats_new_index, TestSite};
use pydocs_parser::application::use_cases::whats_new::whats_new;
use pydocs_parser::utils::errors::ParserError;

#[tokio::test]
async fn test_whats_new_collects_articles() {
    let site = TestSite::start().await;
    site.page("/3/whatsnew/", whats_new_index()).await;
    site.page("/3/whatsnew/3.12.html", whats_new_article("3.12", "Adam Turner"))
        .await;
    site.page("/3/whatsnew/3.11.html", whats_new_article("3.11", "Pablo Galindo Salgado"))
        .await;

    let table = whats_new(&site.session, &site.settings.sources)
        .await
        .unwrap();

    assert_eq!(table.header(), ["Link to article", "Title", "Editor, Author"]);
    assert_eq!(
        table.rows(),
        [
            vec![
                site.url("/3/whatsnew/3.12.html"),
                "What's New In Python 3.12".to_string(),
                "Editor Adam Turner".to_string(),
            ],
            vec![
                site.url("/3/whatsnew/3.11.html"),
                "What's New In Python 3.11".to_string(),
                "Editor Pablo Galindo Salgado".to_string(),
            ],
        ]
    );

    // 嵌套的 toctree-l2 链接不会被抓取
    let paths = site.requested_paths().await;
    assert_eq!(
        paths,
        ["/3/whatsnew/", "/3/whatsnew/3.12.html", "/3/whatsnew/3.11.html"]
    );
}

#[tokio::test]
async fn test_whats_new_missing_wrapper() {
    let site = TestSite::start().await;
    site.page("/3/whatsnew/", "<html><body><p>moved</p></body></html>")
        .await;

    let err = whats_new(&site.session, &site.settings.sources)
        .await
        .unwrap_err();

    assert!(err.is_element_not_found());
    assert_eq!(
        err.to_string(),
        r#"Tag not found: div[class="toctree-wrapper"]"#
    );
}

#[tokio::test]
async fn test_whats_new_article_without_dl_aborts() {
    let site = TestSite::start().await;
    site.page("/3/whatsnew/", whats_new_index()).await;
    site.page(
        "/3/whatsnew/3.12.html",
        "<html><body><h1>What's New In Python 3.12</h1></body></html>",
    )
    .await;

    let err = whats_new(&site.session, &site.settings.sources)
        .await
        .unwrap_err();

    assert!(matches!(err, ParserError::ElementNotFound { .. }));
    // 第二篇文章不再请求
    assert!(!site
        .requested_paths()
        .await
        .contains(&"/3/whatsnew/3.11.html".to_string()));
}
