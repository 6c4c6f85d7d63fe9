mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn alerts_require_authentication() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/alerts", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn garbage_tokens_are_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/alerts", server.base_url))
        .bearer_auth("not.a.token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn viewers_cannot_create_alerts() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::bearer_token(Uuid::new_v4(), "viewer");

    let res = client
        .post(format!("{}/alerts", server.base_url))
        .bearer_auth(token)
        .json(&json!({ "productId": Uuid::new_v4(), "threshold": 10.0 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "FORBIDDEN");
    Ok(())
}

#[tokio::test]
async fn analysts_cannot_administer_users() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::bearer_token(Uuid::new_v4(), "analyst");

    let res = client
        .get(format!("{}/users", server.base_url))
        .bearer_auth(token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn tokens_with_unknown_roles_are_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let token = common::bearer_token(Uuid::new_v4(), "superuser");

    let res = client
        .get(format!("{}/alerts", server.base_url))
        .bearer_auth(token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
