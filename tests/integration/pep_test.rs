// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{pep_detail, pep_index, TestSite};
use pydocs_parser::application::use_cases::pep_audit::pep;
use pydocs_parser::domain::models::pep_status::ExpectedStatusMap;
use pydocs_parser::utils::errors::ParserError;

fn row(status: &str, amount: usize) -> Vec<String> {
    vec![status.to_string(), amount.to_string()]
}

#[tokio::test]
async fn test_pep_audit_counts_statuses() {
    let site = TestSite::start().await;
    site.page(
        "/peps/",
        pep_index(&[("SA", 1), ("PF", 8), ("SF", 3), ("I", 100)]),
    )
    .await;
    site.page("/peps/pep-0001/", pep_detail("Active")).await;
    site.page("/peps/pep-0008/", pep_detail("Final")).await;
    site.page("/peps/pep-0003/", pep_detail("Active")).await;
    site.page("/peps/pep-0100/", pep_detail("Draft")).await;

    let table = pep(
        &site.session,
        &site.settings.sources,
        &ExpectedStatusMap::pep_defaults(),
    )
    .await
    .unwrap();

    assert_eq!(table.header(), ["Status", "Amount"]);
    assert_eq!(
        table.rows(),
        [row("Active", 2), row("Final", 1), row("Draft", 1), row("Total", 4)]
    );

    // 详情页按表格顺序逐个请求
    assert_eq!(
        site.requested_paths().await,
        [
            "/peps/",
            "/peps/pep-0001/",
            "/peps/pep-0008/",
            "/peps/pep-0003/",
            "/peps/pep-0100/",
        ]
    );
}

#[tokio::test]
async fn test_pep_audit_unknown_code_aborts() {
    let site = TestSite::start().await;
    site.page("/peps/", pep_index(&[("SQ", 5), ("SA", 1)])).await;
    site.page("/peps/pep-0005/", pep_detail("Active")).await;
    site.page("/peps/pep-0001/", pep_detail("Active")).await;

    let err = pep(
        &site.session,
        &site.settings.sources,
        &ExpectedStatusMap::pep_defaults(),
    )
    .await
    .unwrap_err();

    match err {
        ParserError::UnknownStatusCode { code, link } => {
            assert_eq!(code, "Q");
            assert_eq!(link, site.url("/peps/pep-0005/"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!site
        .requested_paths()
        .await
        .contains(&"/peps/pep-0001/".to_string()));
}

#[tokio::test]
async fn test_pep_audit_missing_detail_page() {
    let site = TestSite::start().await;
    site.page("/peps/", pep_index(&[("SA", 1)])).await;
    // 未挂载的路由由 wiremock 返回空的 404，解析为空文档

    let err = pep(
        &site.session,
        &site.settings.sources,
        &ExpectedStatusMap::pep_defaults(),
    )
    .await
    .unwrap_err();

    assert!(err.is_element_not_found());
    assert_eq!(
        err.to_string(),
        r#"Tag not found: dl[class="rfc2822 field-list simple"]"#
    );
}

#[tokio::test]
async fn test_pep_audit_custom_mapping() {
    let site = TestSite::start().await;
    site.page("/peps/", pep_index(&[("SA", 1)])).await;
    site.page("/peps/pep-0001/", pep_detail("Active")).await;
    let expected = ExpectedStatusMap::new([("A", vec!["Accepted"])]);

    let table = pep(&site.session, &site.settings.sources, &expected)
        .await
        .unwrap();

    // 不一致只记录日志，统计仍以详情页状态为准
    assert_eq!(table.rows(), [row("Active", 1), row("Total", 1)]);
}
