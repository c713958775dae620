//! Tests for the CMS module

use super::*;
use crate::config::CmsSettings;
use crate::error::Error;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::SortOrder;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const POSTS_Q: &str = r#"[[at(document.type,"posts")]]"#;

fn client_for(server: &MockServer, configure: impl FnOnce(&mut CmsSettings)) -> CmsClient {
    let http = HttpClient::with_config(
        HttpClientConfig::builder()
            .max_retries(0)
            .no_rate_limit()
            .build(),
    )
    .unwrap();
    let mut settings = CmsSettings::new(format!("{}/api/v2", server.uri()));
    configure(&mut settings);
    CmsClient::new(http, settings)
}

fn doc(uid: &str, title: &str) -> Value {
    json!({
        "id": format!("id-{uid}"),
        "uid": uid,
        "first_publication_date": "2021-03-15T19:25:28+0000",
        "data": { "title": title, "subtitle": "Sub", "author": "Ana" }
    })
}

async fn mount_root(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/api/v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refs": [
                { "id": "release", "ref": "release-ref", "label": "Spring", "isMasterRef": false },
                { "id": "master", "ref": "master-ref", "label": "Master", "isMasterRef": true }
            ]
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

// ============================================================================
// Query Builder
// ============================================================================

#[test]
fn test_query_params() {
    let query = CmsQuery::new()
        .predicate(Predicate::document_type("posts"))
        .fetch("posts.title")
        .fetch("posts.author")
        .page_size(20)
        .after("post-b")
        .order_by(Ordering::publication_date(true));

    assert_eq!(
        query.to_params(),
        vec![
            ("q", POSTS_Q.to_string()),
            ("pageSize", "20".to_string()),
            ("fetch", "posts.title,posts.author".to_string()),
            ("after", "post-b".to_string()),
            (
                "orderings",
                "[document.first_publication_date desc]".to_string()
            ),
        ]
    );
}

#[test]
fn test_query_predicates_and_ascending_order() {
    let query = CmsQuery::new()
        .predicate(Predicate::document_type("posts"))
        .predicate(Predicate::uid("posts", "say \"hi\""))
        .order_by(Ordering::publication_date(false));

    assert_eq!(
        query.q(),
        r#"[[at(document.type,"posts")][at(my.posts.uid,"say \"hi\"")]]"#
    );
    assert_eq!(
        query.orderings_param().as_deref(),
        Some("[document.first_publication_date]")
    );
    assert_eq!(CmsQuery::new().orderings_param(), None);
}

#[test]
fn test_api_root_master_ref() {
    let root: ApiRoot = serde_json::from_value(json!({
        "refs": [{ "id": "master", "ref": "abc", "isMasterRef": true }]
    }))
    .unwrap();
    assert_eq!(root.master_ref().map(|r| r.reference.as_str()), Some("abc"));
    assert!(ApiRoot::default().master_ref().is_none());
}

// ============================================================================
// Client
// ============================================================================

#[tokio::test]
async fn test_first_page_query() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("ref", "master-ref"))
        .and(query_param("q", POSTS_Q))
        .and(query_param("pageSize", "2"))
        .and(query_param("fetch", "posts.title,posts.subtitle,posts.author"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "total_pages": 2,
            "results": [doc("post-a", "A"), doc("post-b", "B")],
            "next_page": "https://cms.example/page2"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, |_| {});
    let page = client.first_page(2).await.unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].uid.as_deref(), Some("post-a"));
    assert_eq!(page.cursor(), Some("https://cms.example/page2"));
}

#[tokio::test]
async fn test_master_ref_is_cached() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    let client = client_for(&server, |_| {});
    assert_eq!(client.master_ref().await.unwrap(), "master-ref");
    assert_eq!(client.master_ref().await.unwrap(), "master-ref");
}

#[tokio::test]
async fn test_ref_override_skips_lookup() {
    let server = MockServer::start().await;
    mount_root(&server, 0).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("ref", "release-ref"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": [], "next_page": null })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, |s| s.ref_override = Some("release-ref".to_string()));
    let page = client.first_page(20).await.unwrap();
    assert!(page.is_empty());
    assert!(page.cursor().is_none());
}

#[tokio::test]
async fn test_access_token_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2"))
        .and(query_param("access_token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "refs": [{ "id": "master", "ref": "master-ref", "isMasterRef": true }]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("access_token", "secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": [doc("post-a", "A")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, |s| s.access_token = Some("secret".to_string()));
    let page = client.first_page(20).await.unwrap();
    assert_eq!(page.results.len(), 1);
}

#[tokio::test]
async fn test_get_by_uid() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("q", r#"[[at(my.posts.uid,"post-b")]]"#))
        .and(query_param("pageSize", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": [doc("post-b", "B")] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("q", r#"[[at(my.posts.uid,"missing")]]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server, |_| {});

    let found = client.get_by_uid("post-b").await.unwrap();
    assert_eq!(found.data.title.as_deref(), Some("B"));

    let err = client.get_by_uid("missing").await.unwrap_err();
    assert!(matches!(err, Error::DocumentNotFound { ref uid, .. } if uid == "missing"));
}

#[tokio::test]
async fn test_neighbor_page_queries() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("after", "post-b"))
        .and(query_param("pageSize", "1"))
        .and(query_param("orderings", "[document.first_publication_date]"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": [doc("post-c", "C")] })),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("after", "post-b"))
        .and(query_param(
            "orderings",
            "[document.first_publication_date desc]",
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "results": [doc("post-a", "A")] })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, |_| {});

    let next = client
        .neighbor_page("post-b", SortOrder::Ascending)
        .await
        .unwrap();
    assert_eq!(next.results[0].uid.as_deref(), Some("post-c"));

    let previous = client
        .neighbor_page("post-b", SortOrder::Descending)
        .await
        .unwrap();
    assert_eq!(previous.results[0].uid.as_deref(), Some("post-a"));
}

#[tokio::test]
async fn test_fetch_page_follows_cursor_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .and(query_param("page", "2"))
        .and(query_param("access_token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "results": [doc("post-c", "C")],
            "next_page": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, |s| s.access_token = Some("secret".to_string()));
    let cursor = format!(
        "{}/api/v2/documents/search?ref=master-ref&page=2&pageSize=20",
        server.uri()
    );

    let page = client.fetch_page(&cursor).await.unwrap();
    assert_eq!(page.results[0].uid.as_deref(), Some("post-c"));
    assert!(page.cursor().is_none());
}

#[tokio::test]
async fn test_fetch_page_keeps_existing_token() {
    let server = MockServer::start().await;
    let client = client_for(&server, |s| s.access_token = Some("secret".to_string()));

    let url = client
        .authorize_cursor("https://cms.example/search?page=2&access_token=other")
        .unwrap();
    assert_eq!(url, "https://cms.example/search?page=2&access_token=other");

    let err = client.fetch_page("not a url").await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

#[tokio::test]
async fn test_server_error_surfaces() {
    let server = MockServer::start().await;
    mount_root(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/documents/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server, |_| {});
    let err = client.first_page(20).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}
