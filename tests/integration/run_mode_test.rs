// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{download_page, main_page, pep_detail, pep_index, TestSite};
use pydocs_parser::application::use_cases::mode::{run_mode, ParserMode};
use pydocs_parser::domain::models::pep_status::ExpectedStatusMap;
use pydocs_parser::presentation::output::{control_output, OutputFormat};

#[tokio::test]
async fn test_run_mode_download_has_no_table() {
    let site = TestSite::start().await;
    site.page("/3/download.html", download_page()).await;
    site.file("/3/archives/python-3.13-docs-pdf-a4.zip", b"zip")
        .await;

    let results = run_mode(
        ParserMode::Download,
        &site.session,
        &site.settings,
        &ExpectedStatusMap::pep_defaults(),
    )
    .await
    .unwrap();

    assert!(results.is_none());
    assert!(site
        .workdir
        .path()
        .join("downloads/python-3.13-docs-pdf-a4.zip")
        .is_file());
}

#[tokio::test]
async fn test_run_mode_latest_versions_to_file() {
    let site = TestSite::start().await;
    site.page("/3/", main_page(true)).await;

    let table = run_mode(
        ParserMode::LatestVersions,
        &site.session,
        &site.settings,
        &ExpectedStatusMap::pep_defaults(),
    )
    .await
    .unwrap()
    .unwrap();

    let path = control_output(
        &table,
        Some(OutputFormat::File),
        ParserMode::LatestVersions,
        &site.settings.storage,
    )
    .await
    .unwrap()
    .unwrap();

    assert!(path.starts_with(site.workdir.path().join("results")));
    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("latest-versions_"));
    assert!(file_name.ends_with(".csv"));

    let csv = std::fs::read_to_string(&path).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Link to documentation,Version,Status"));
    assert_eq!(
        lines.next(),
        Some("https://docs.python.org/3.14/,3.14,in development")
    );
}

#[tokio::test]
async fn test_run_mode_pep_prints_table() {
    let site = TestSite::start().await;
    site.page("/peps/", pep_index(&[("SW", 42)])).await;
    site.page("/peps/pep-0042/", pep_detail("Withdrawn")).await;

    let table = run_mode(
        ParserMode::Pep,
        &site.session,
        &site.settings,
        &ExpectedStatusMap::pep_defaults(),
    )
    .await
    .unwrap()
    .unwrap();

    let written = control_output(&table, None, ParserMode::Pep, &site.settings.storage)
        .await
        .unwrap();

    assert!(written.is_none());
    assert_eq!(table.rows().last().unwrap(), &["Total", "1"]);
}
