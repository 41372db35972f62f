//! `/api/clip` against a stubbed clipping server.

mod support;

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{app, json_post};

#[tokio::test]
async fn forwards_request_and_returns_payload_verbatim() {
    let clipper = MockServer::start().await;
    let payload = json!({ "downloadUrl": "10.0.0.1:9000/download/clipped_1.mp4", "extra": [1, 2] });
    Mock::given(method("POST"))
        .and(path("/clip"))
        .and(body_json(json!({
            "tweetUrl": "https://x.com/u/status/1",
            "start": "00:00:05",
            "end": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .expect(1)
        .mount(&clipper)
        .await;

    let request = json!({ "tweetUrl": "https://x.com/u/status/1", "start": "00:00:05", "end": "" });
    let resp = app(&clipper.uri())
        .oneshot(json_post("/api/clip", request.to_string()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(support::body_json(resp).await, payload);
}

#[tokio::test]
async fn missing_times_are_sent_as_empty_strings() {
    let clipper = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clip"))
        .and(body_json(json!({ "tweetUrl": "https://twitter.com/u/status/2", "start": "", "end": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "downloadUrl": "h/c.mp4" })))
        .expect(1)
        .mount(&clipper)
        .await;

    let resp = app(&clipper.uri())
        .oneshot(json_post(
            "/api/clip",
            json!({ "tweetUrl": "https://twitter.com/u/status/2" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn json_error_payload_is_passed_through() {
    let clipper = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clip"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "Missing required fields" })),
        )
        .mount(&clipper)
        .await;

    let resp = app(&clipper.uri())
        .oneshot(json_post("/api/clip", json!({ "tweetUrl": "" }).to_string()))
        .await
        .unwrap();

    assert_eq!(
        support::body_json(resp).await,
        json!({ "error": "Missing required fields" })
    );
}

#[tokio::test]
async fn plain_text_answer_is_a_relay_failure() {
    let clipper = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clip"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Error downloading the video\n"))
        .mount(&clipper)
        .await;

    let resp = app(&clipper.uri())
        .oneshot(json_post(
            "/api/clip",
            json!({ "tweetUrl": "https://x.com/u/status/1" }).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        support::body_json(resp).await,
        json!({ "error": "Failed to reach clipping server" })
    );
}

#[tokio::test]
async fn each_submission_is_an_independent_call() {
    let clipper = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "downloadUrl": "h/c.mp4" })))
        .expect(2)
        .mount(&clipper)
        .await;

    let router = app(&clipper.uri());
    let body = json!({ "tweetUrl": "https://x.com/u/status/1" }).to_string();
    for _ in 0..2 {
        let resp = router
            .clone()
            .oneshot(json_post("/api/clip", body.clone()))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn health_reports_clip_endpoint() {
    let resp = app("http://clipper.internal:9000/")
        .oneshot(
            axum::http::Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = support::body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["clipServer"], "http://clipper.internal:9000/clip");
    assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
}
