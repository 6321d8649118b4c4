// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::TestSite;
use pydocs_parser::domain::services::page_fetcher::fetch;
use pydocs_parser::engines::cached_engine::CachedSession;
use pydocs_parser::engines::reqwest_engine::ReqwestSession;
use pydocs_parser::engines::traits::HttpSession;
use pydocs_parser::infrastructure::cache::response_cache::ResponseCache;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn cached(site: &TestSite) -> CachedSession<ReqwestSession> {
    CachedSession::new(
        ReqwestSession::new(&site.settings.http).unwrap(),
        ResponseCache::new(&site.settings.storage.cache_dir),
    )
}

#[tokio::test]
async fn test_second_fetch_served_from_cache() {
    let site = TestSite::start().await;
    site.page("/3/", "<html><body>Главная</body></html>").await;
    let session = cached(&site);
    let url = site.url("/3/");

    let first = fetch(&session, &url).await.unwrap();
    let second = fetch(&session, &url).await.unwrap();

    assert_eq!(first.content, second.content);
    assert_eq!(second.body(), "<html><body>Главная</body></html>");
    assert_eq!(site.requested_paths().await.len(), 1);
}

#[tokio::test]
async fn test_clear_forces_refetch() {
    let site = TestSite::start().await;
    site.page("/3/", "<html></html>").await;
    let session = cached(&site);
    let url = site.url("/3/");

    fetch(&session, &url).await.unwrap();
    session.clear().await.unwrap();
    fetch(&session, &url).await.unwrap();

    assert_eq!(site.requested_paths().await.len(), 2);
}

#[tokio::test]
async fn test_error_responses_are_not_cached() {
    let site = TestSite::start().await;
    Mock::given(method("GET"))
        .and(path("/3/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .mount(&site.server)
        .await;
    let session = cached(&site);
    let url = site.url("/3/");

    let first = fetch(&session, &url).await.unwrap();
    fetch(&session, &url).await.unwrap();

    assert_eq!(first.status_code, 503);
    assert_eq!(site.requested_paths().await.len(), 2);
}

#[tokio::test]
async fn test_body_forced_to_utf8() {
    let site = TestSite::start().await;
    Mock::given(method("GET"))
        .and(path("/3/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                "Что нового".as_bytes().to_vec(),
                "text/html; charset=iso-8859-1",
            ),
        )
        .mount(&site.server)
        .await;

    let page = fetch(&site.session, &site.url("/3/")).await.unwrap();

    assert_eq!(page.body(), "Что нового");
}

#[tokio::test]
async fn test_cached_entry_keeps_content_type() {
    let site = TestSite::start().await;
    site.page("/3/", "<html></html>").await;
    let session = cached(&site);
    let url = site.url("/3/");

    let live = session.get(&url).await.unwrap().unwrap();
    let cached = session.get(&url).await.unwrap().unwrap();

    assert_eq!(live.content_type.as_deref(), Some("text/html; charset=utf-8"));
    assert_eq!(cached.content_type, live.content_type);
    assert_eq!(site.requested_paths().await.len(), 1);
}
