use chrono::SubsecRound;
use serde_json::{json, Value};

use crate::helper::{spawn_app, spawn_app_with_broken_store};

#[tokio::test]
async fn contact_returns_201_for_valid_form_data() {
    let app = spawn_app().await;
    let before = chrono::Utc::now().trunc_subsecs(6);

    let body = r#"{"name": "Al", "email": "al@example.com", "subject": "general", "message": "Hello there!"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(201, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": true, "message": "Contact form submission successful" })
    );

    let saved = app.store.contact_submissions().await;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].name.as_ref(), "Al");
    assert_eq!(saved[0].email.as_ref(), "al@example.com");
    assert_eq!(saved[0].subject.as_str(), "general");
    assert_eq!(saved[0].message.as_ref(), "Hello there!");
    assert!(saved[0].created_at >= before);
}

#[tokio::test]
async fn contact_returns_400_listing_every_invalid_field() {
    let app = spawn_app().await;

    let body = r#"{"name": "A", "email": "bad", "subject": "", "message": "hi"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid form data");
    let fields: Vec<&str> = body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    assert!(app.store.contact_submissions().await.is_empty());
}

#[tokio::test]
async fn contact_returns_400_when_fields_are_missing() {
    let app = spawn_app().await;
    let test_cases = [
        (
            r#"{"email": "al@example.com", "subject": "general", "message": "Hello there!"}"#,
            "name",
        ),
        (
            r#"{"name": "Al", "subject": "general", "message": "Hello there!"}"#,
            "email",
        ),
        (
            r#"{"name": "Al", "email": "al@example.com", "message": "Hello there!"}"#,
            "subject",
        ),
        (
            r#"{"name": "Al", "email": "al@example.com", "subject": "general"}"#,
            "message",
        ),
    ];

    for (body, missing) in test_cases {
        let response = app.post_contact(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was missing the {}",
            missing
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(
            body["errors"],
            json!([{ "field": missing, "message": "required" }])
        );
    }
    assert!(app.store.contact_submissions().await.is_empty());
}

#[tokio::test]
async fn contact_returns_400_for_an_unknown_subject() {
    let app = spawn_app().await;

    let body = r#"{"name": "Al", "email": "al@example.com", "subject": "sponsorship", "message": "Hello there!"}"#;
    let response = app.post_contact(body).await;

    assert_eq!(400, response.status().as_u16());
    assert!(app.store.contact_submissions().await.is_empty());
}

#[tokio::test]
async fn contact_returns_400_for_malformed_json() {
    let app = spawn_app().await;

    let response = app.post_raw("/api/contact", r#"{"name": "Al","#).await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn contact_returns_500_without_details_when_the_store_fails() {
    let addr = spawn_app_with_broken_store().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/contact", addr))
        .json(&json!({
            "name": "Al",
            "email": "al@example.com",
            "subject": "donation",
            "message": "I would like to donate."
        }))
        .send()
        .await
        .expect("The request should succeed.");

    assert_eq!(500, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "success": false, "message": "Failed to submit contact form" })
    );
}
