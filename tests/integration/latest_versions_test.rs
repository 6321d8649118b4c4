// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{main_page, TestSite};
use pydocs_parser::application::use_cases::latest_versions::latest_versions;

#[tokio::test]
async fn test_latest_versions_table() {
    let site = TestSite::start().await;
    site.page("/3/", main_page(true)).await;

    let table = latest_versions(&site.session, &site.settings.sources)
        .await
        .unwrap();

    assert_eq!(table.header(), ["Link to documentation", "Version", "Status"]);
    assert_eq!(
        table.rows(),
        [
            vec![
                "https://docs.python.org/3.14/".to_string(),
                "3.14".to_string(),
                "in development".to_string(),
            ],
            vec![
                "https://docs.python.org/3.13/".to_string(),
                "3.13".to_string(),
                "stable".to_string(),
            ],
            vec![
                "https://www.python.org/doc/versions/".to_string(),
                "All versions".to_string(),
                String::new(),
            ],
        ]
    );
}

#[tokio::test]
async fn test_latest_versions_without_marker() {
    let site = TestSite::start().await;
    site.page("/3/", main_page(false)).await;

    let err = latest_versions(&site.session, &site.settings.sources)
        .await
        .unwrap_err();

    assert!(err.is_element_not_found());
    assert_eq!(err.to_string(), r#"Tag not found: text "All versions""#);
}
