use super::helpers::{TestApp, end_cursor, expect_status, get, node_titles, read_json, send, spawn_app};
use axum::http::StatusCode;
use chrono::{DateTime, Duration, TimeZone, Utc};
use quill_api::domain::profile::repository::ProfileRepository;
use serde_json::Value;
use uuid::Uuid;

fn at(second: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap() + Duration::seconds(second)
}

async fn with_profiles(app: &TestApp, usernames: &[&str]) {
    for username in usernames {
        app.profiles
            .upsert(username, Some(format!("{} writes here", username)))
            .await
            .unwrap();
    }
}

async fn page(app: &TestApp, uri: &str) -> Value {
    let res = send(&app.app, get(uri)).await;
    read_json(expect_status(res, StatusCode::OK).await).await
}

#[tokio::test]
async fn five_posts_newest_first_in_pages_of_two() {
    let app = spawn_app();
    with_profiles(&app, &["ana"]).await;
    for n in 1..=5u128 {
        app.posts
            .insert_at(Uuid::from_u128(n), "ana", &format!("p{}", n), at(n as i64));
    }

    let first = page(&app, "/api/v1/posts?limit=2").await;
    assert_eq!(node_titles(&first), vec!["p5", "p4"]);
    assert_eq!(first["totalCount"], 5);
    assert_eq!(first["hasNextPage"], true);

    let cursor = end_cursor(&first).unwrap();
    let second = page(&app, &format!("/api/v1/posts?limit=2&cursor={}", cursor)).await;
    assert_eq!(node_titles(&second), vec!["p3", "p2"]);
    assert_eq!(second["hasNextPage"], true);

    let cursor = end_cursor(&second).unwrap();
    let third = page(&app, &format!("/api/v1/posts?limit=2&cursor={}", cursor)).await;
    assert_eq!(node_titles(&third), vec!["p1"]);
    assert_eq!(third["hasNextPage"], false);
    assert_eq!(third["totalCount"], 5);
}

#[tokio::test]
async fn equal_timestamps_are_walked_by_id() {
    let app = spawn_app();
    with_profiles(&app, &["ana"]).await;
    app.posts.insert_at(Uuid::from_u128(3), "ana", "c", at(0));
    app.posts.insert_at(Uuid::from_u128(1), "ana", "a", at(0));
    app.posts.insert_at(Uuid::from_u128(2), "ana", "b", at(0));

    let mut seen = Vec::new();
    let mut uri = "/api/v1/posts?limit=1&order=ASC".to_string();
    loop {
        let body = page(&app, &uri).await;
        seen.extend(node_titles(&body));
        if body["hasNextPage"] == false {
            break;
        }
        uri = format!(
            "/api/v1/posts?limit=1&order=ASC&cursor={}",
            end_cursor(&body).unwrap()
        );
    }

    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn author_filter_holds_across_the_tie_boundary() {
    let app = spawn_app();
    with_profiles(&app, &["ana", "bo"]).await;
    app.posts.insert_at(Uuid::from_u128(1), "ana", "ana-1", at(0));
    app.posts.insert_at(Uuid::from_u128(2), "bo", "bo-2", at(0));
    app.posts.insert_at(Uuid::from_u128(3), "ana", "ana-3", at(0));
    app.posts.insert_at(Uuid::from_u128(4), "bo", "bo-4", at(-1));

    let first = page(&app, "/api/v1/profiles/ana/posts?limit=1").await;
    assert_eq!(node_titles(&first), vec!["ana-1"]);
    assert_eq!(first["totalCount"], 2);

    let second = page(
        &app,
        &format!(
            "/api/v1/profiles/ana/posts?limit=1&cursor={}",
            end_cursor(&first).unwrap()
        ),
    )
    .await;
    assert_eq!(node_titles(&second), vec!["ana-3"]);
    assert_eq!(second["hasNextPage"], false);

    let via_query = page(&app, "/api/v1/posts?author=bo&limit=10").await;
    assert_eq!(node_titles(&via_query), vec!["bo-2", "bo-4"]);
    assert_eq!(via_query["totalCount"], 2);
}

#[tokio::test]
async fn every_post_carries_its_authors_profile() {
    let app = spawn_app();
    with_profiles(&app, &["ana", "bo"]).await;
    app.posts.insert_at(Uuid::from_u128(1), "ana", "one", at(1));
    app.posts.insert_at(Uuid::from_u128(2), "bo", "two", at(2));
    app.posts.insert_at(Uuid::from_u128(3), "ana", "three", at(3));

    let body = page(&app, "/api/v1/posts").await;
    let nodes = body["nodes"].as_array().unwrap();
    let authors: Vec<&str> = nodes
        .iter()
        .map(|n| n["profile"]["username"].as_str().unwrap())
        .collect();
    assert_eq!(authors, vec!["ana", "bo", "ana"]);
    assert_eq!(nodes[1]["profile"]["bio"], "bo writes here");
    assert_eq!(nodes[1]["authorUsername"], "bo");

    let edges = body["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0]["node"]["title"], "three");
}

#[tokio::test]
async fn empty_collection_is_an_empty_page() {
    let app = spawn_app();
    let body = page(&app, "/api/v1/posts").await;

    assert_eq!(body["totalCount"], 0);
    assert_eq!(body["hasNextPage"], false);
    assert_eq!(body["nodes"], serde_json::json!([]));
    assert_eq!(body["edges"], serde_json::json!([]));
}

#[tokio::test]
async fn out_of_range_limits_are_rejected() {
    let app = spawn_app();
    for limit in [0, 101, -1] {
        let res = send(&app.app, get(&format!("/api/v1/posts?limit={}", limit))).await;
        let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
        assert!(body["error"].as_str().unwrap().contains("between 1 and 100"));
    }

    let res = send(&app.app, get("/api/v1/posts?limit=100")).await;
    expect_status(res, StatusCode::OK).await;
}

#[tokio::test]
async fn malformed_cursor_is_a_bad_request() {
    let app = spawn_app();
    with_profiles(&app, &["ana"]).await;
    app.posts.insert_at(Uuid::from_u128(1), "ana", "one", at(1));

    let res = send(&app.app, get("/api/v1/posts?cursor=bm90LWpzb24")).await;
    let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
    assert!(body["error"].as_str().unwrap().starts_with("Malformed cursor"));
}

#[tokio::test]
async fn unreadable_query_strings_get_the_json_error_body() {
    let app = spawn_app();
    with_profiles(&app, &["ana"]).await;

    for uri in [
        "/api/v1/posts?order=sideways",
        "/api/v1/posts?limit=abc",
        "/api/v1/profiles/ana/posts?limit=abc",
    ] {
        let res = send(&app.app, get(uri)).await;
        let body: Value = read_json(expect_status(res, StatusCode::BAD_REQUEST).await).await;
        assert!(
            body["error"].as_str().is_some_and(|e| !e.is_empty()),
            "{}: {}",
            uri,
            body
        );
    }
}
