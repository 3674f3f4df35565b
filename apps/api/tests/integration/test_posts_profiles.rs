use super::helpers::{authorized, expect_status, get, json_request, read_json, send, sign_up, spawn_app};
use axum::http::StatusCode;
use serde_json::{Value, json};

async fn publish(app: &axum::Router, token: &str, title: &str) -> Value {
    let res = send(
        app,
        json_request(
            "POST",
            "/api/v1/posts",
            Some(token),
            &json!({ "title": title, "text": format!("{} body", title) }),
        ),
    )
    .await;
    read_json(expect_status(res, StatusCode::CREATED).await).await
}

#[tokio::test]
async fn post_lifecycle() {
    let app = spawn_app();
    let token = sign_up(&app.app, "ana").await;

    let created = publish(&app.app, &token, "Hello").await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["authorUsername"], "ana");

    let res = send(&app.app, get(&format!("/api/v1/posts/{}", id))).await;
    let fetched: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(fetched["title"], "Hello");
    assert_eq!(fetched["profile"]["username"], "ana");

    let res = send(
        &app.app,
        json_request(
            "PATCH",
            &format!("/api/v1/posts/{}", id),
            Some(&token),
            &json!({ "text": "edited" }),
        ),
    )
    .await;
    let updated: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(updated["title"], "Hello");
    assert_eq!(updated["text"], "edited");

    let res = send(
        &app.app,
        authorized("DELETE", &format!("/api/v1/posts/{}", id), &token),
    )
    .await;
    let removed: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(removed["id"], id.as_str());

    let res = send(&app.app, get(&format!("/api/v1/posts/{}", id))).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn strangers_cannot_touch_someone_elses_post() {
    let app = spawn_app();
    let ana = sign_up(&app.app, "ana").await;
    let bo = sign_up(&app.app, "bo").await;
    let created = publish(&app.app, &ana, "Mine").await;
    let uri = format!("/api/v1/posts/{}", created["id"].as_str().unwrap());

    let res = send(
        &app.app,
        json_request("PATCH", &uri, Some(&bo), &json!({ "title": "Theirs" })),
    )
    .await;
    expect_status(res, StatusCode::FORBIDDEN).await;

    let res = send(&app.app, authorized("DELETE", &uri, &bo)).await;
    expect_status(res, StatusCode::FORBIDDEN).await;
}

#[tokio::test]
async fn publishing_requires_authentication_and_a_title() {
    let app = spawn_app();
    let res = send(
        &app.app,
        json_request("POST", "/api/v1/posts", None, &json!({ "title": "t", "text": "x" })),
    )
    .await;
    expect_status(res, StatusCode::UNAUTHORIZED).await;

    let token = sign_up(&app.app, "ana").await;
    let res = send(
        &app.app,
        json_request(
            "POST",
            "/api/v1/posts",
            Some(&token),
            &json!({ "title": "", "text": "x" }),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn new_posts_lead_the_listing() {
    let app = spawn_app();
    let token = sign_up(&app.app, "ana").await;
    publish(&app.app, &token, "older").await;
    publish(&app.app, &token, "newer").await;

    let res = send(&app.app, get("/api/v1/posts?limit=1")).await;
    let page: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(page["nodes"][0]["title"], "newer");
    assert_eq!(page["hasNextPage"], true);
}

#[tokio::test]
async fn profile_upsert_and_lookup() {
    let app = spawn_app();
    let token = sign_up(&app.app, "ana").await;

    let res = send(
        &app.app,
        json_request(
            "PUT",
            "/api/v1/profiles/me",
            Some(&token),
            &json!({ "bio": "Writes about trains" }),
        ),
    )
    .await;
    let saved: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(saved["bio"], "Writes about trains");

    let res = send(&app.app, get("/api/v1/profiles/ana")).await;
    let profile: Value = read_json(expect_status(res, StatusCode::OK).await).await;
    assert_eq!(profile, json!({ "username": "ana", "bio": "Writes about trains" }));

    let res = send(
        &app.app,
        json_request(
            "PUT",
            "/api/v1/profiles/me",
            Some(&token),
            &json!({ "bio": "b".repeat(1001) }),
        ),
    )
    .await;
    expect_status(res, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn unknown_profiles_are_not_found() {
    let app = spawn_app();

    let res = send(&app.app, get("/api/v1/profiles/ghost")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;

    let res = send(&app.app, get("/api/v1/profiles/ghost/posts")).await;
    expect_status(res, StatusCode::NOT_FOUND).await;
}
