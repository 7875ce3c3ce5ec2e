//
//  topgg
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end client tests against a local mock server.

use std::time::Duration;

use mockito::{Matcher, Server};
use tokio_util::sync::CancellationToken;
use topgg::api::current::ApplicationCommand;
use topgg::api::{ApiError, BotSortField};
use topgg::{Error, Snowflake, TopggClient};

const BOT_ID: u64 = 264811613708746752;

fn client(server: &Server) -> TopggClient {
    TopggClient::builder()
        .token("secret-token")
        .bot_id(BOT_ID)
        .base_url(server.url())
        .build()
        .unwrap()
}

#[tokio::test]
async fn legacy_requests_send_raw_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/bots/{BOT_ID}/stats").as_str())
        .match_header("authorization", "secret-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"server_count":1200}"#)
        .create_async()
        .await;

    let stats = client(&server).get_bot_stats(&CancellationToken::new()).await.unwrap();

    assert_eq!(stats.server_count, Some(1200));
    mock.assert_async().await;
}

#[tokio::test]
async fn current_requests_send_bearer_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/projects/@me/commands")
        .match_header("authorization", "Bearer secret-token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!([
            {"type": 1, "name": "ping", "description": "Pong"}
        ])))
        .with_status(204)
        .create_async()
        .await;

    client(&server)
        .update_bot_commands(
            &[ApplicationCommand::chat_input("ping", "Pong")],
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn post_server_count_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bots/{BOT_ID}/stats").as_str())
        .match_body(Matcher::Json(serde_json::json!({"server_count": 42})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client(&server)
        .post_server_count(42, &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn search_sends_query_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/bots")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "2".into()),
            Matcher::UrlEncoded("sort".into(), "-monthlyPoints".into()),
            Matcher::UrlEncoded("fields".into(), "id,username".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"results":[{"id":"1","username":"One"},{"id":2,"username":"Two"}],
                "limit":2,"offset":0,"count":2,"total":900}"#,
        )
        .create_async()
        .await;

    let client = client(&server);
    let page = client
        .search()
        .limit(2)
        .sort_by(BotSortField::MonthlyPointsDesc)
        .include_field("id")
        .include_field("username")
        .execute(&CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(page.count, 2);
    assert_eq!(page.total, 900);
    assert_eq!(page.results[1].id, Snowflake::new(2));
    mock.assert_async().await;
}

#[tokio::test]
async fn check_vote_passes_user_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", format!("/bots/{BOT_ID}/check").as_str())
        .match_query(Matcher::UrlEncoded("userId".into(), "8".into()))
        .with_status(200)
        .with_body(r#"{"voted":1}"#)
        .create_async()
        .await;

    let check = client(&server)
        .check_user_vote(Snowflake::new(8), &CancellationToken::new())
        .await
        .unwrap();

    assert!(check.has_voted());
    mock.assert_async().await;
}

#[tokio::test]
async fn vote_status_with_source() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/projects/@me/votes/8")
        .match_query(Matcher::UrlEncoded("source".into(), "discord".into()))
        .with_status(200)
        .with_body(r#"{"created_at":"2025-01-01T00:00:00Z","expires_at":"2025-01-01T12:00:00Z","weight":1}"#)
        .create_async()
        .await;

    let status = client(&server)
        .get_vote_status(Snowflake::new(8), Some("discord"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(status.weight, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn not_found_is_classified() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", format!("/bots/{BOT_ID}/votes").as_str())
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create_async()
        .await;

    let err = client(&server).get_bot_votes(&CancellationToken::new()).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn rate_limit_carries_retry_after() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", format!("/bots/{BOT_ID}/stats").as_str())
        .with_status(429)
        .with_header("retry-after", "3600")
        .with_body(r#"{"retry-after":10}"#)
        .create_async()
        .await;

    let err = client(&server).get_bot_stats(&CancellationToken::new()).await.unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.retry_after(), Some(Duration::from_secs(3600)));
}

#[tokio::test]
async fn server_error_keeps_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", format!("/bots/{BOT_ID}/stats").as_str())
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let err = client(&server).get_bot_stats(&CancellationToken::new()).await.unwrap_err();

    assert!(matches!(err, Error::Api(ApiError::Server { status: 503, .. })));
}

#[tokio::test]
async fn unauthorized_is_an_auth_failure() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", format!("/bots/{BOT_ID}/stats").as_str())
        .with_status(401)
        .with_body(r#"{"error":"Unauthorized"}"#)
        .create_async()
        .await;

    let err = client(&server).get_bot_stats(&CancellationToken::new()).await.unwrap_err();

    assert!(err.is_auth());
    assert!(matches!(err, Error::Api(ApiError::Client { status: 401, .. })));
}

#[tokio::test]
async fn cancelled_before_sending() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = client(&server).get_bot_stats(&cancel).await.unwrap_err();

    assert!(err.is_cancelled());
    mock.assert_async().await;
}
