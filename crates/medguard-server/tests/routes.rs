mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{POSITIVE_NOTE, POSITIVE_REPLY, RecordingTagger, pipeline};
use medguard_server::router;
use medguard_server::state::AppState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(reply: Result<&str, &str>, tagger: RecordingTagger) -> axum::Router {
    router(AppState {
        pipeline: Arc::new(pipeline(reply, Arc::new(tagger))),
    })
}

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post_note(note: &str) -> Request<Body> {
    Request::post("/deidentify")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "note": note }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(Ok("{}"), RecordingTagger::default()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "ok", "detail": "Medguard backend is running" })
    );
}

#[tokio::test]
async fn deidentify_returns_full_response() {
    let (status, body) = send(
        app(Ok(POSITIVE_REPLY), RecordingTagger::default()),
        post_note(POSITIVE_NOTE),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["deidentified_note"],
        "Patient [PATIENT_NAME] visited [HOSPITAL] on [DATE]."
    );
    assert_eq!(body["replacements"].as_array().unwrap().len(), 3);
    assert_eq!(
        body["replacements"][0],
        json!({ "original": "Alice Brown", "tag": "[PATIENT_NAME]", "category": "Patient names" })
    );
    assert_eq!(
        body["validation"],
        json!({ "has_remaining_phi": false, "entities": [] })
    );
    assert_eq!(body["raw_llm_output"], POSITIVE_REPLY);
}

#[tokio::test]
async fn garbage_completion_still_succeeds() {
    let (status, body) = send(
        app(Ok("Sorry, I cannot process this request."), RecordingTagger::default()),
        post_note(POSITIVE_NOTE),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deidentified_note"], POSITIVE_NOTE);
    assert_eq!(body["replacements"], json!([]));
    assert_eq!(body["raw_llm_output"], "Sorry, I cannot process this request.");
}

#[tokio::test]
async fn completion_failure_is_503() {
    let (status, body) = send(
        app(Err("connection refused"), RecordingTagger::default()),
        post_note(POSITIVE_NOTE),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "error": "completion service unavailable" }));
}

#[tokio::test]
async fn tagger_failure_is_502() {
    let tagger = RecordingTagger {
        fail: true,
        ..Default::default()
    };
    let (status, body) = send(app(Ok(POSITIVE_REPLY), tagger), post_note(POSITIVE_NOTE)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "error": "entity scanner unavailable" }));
}

#[tokio::test]
async fn missing_note_field_is_rejected() {
    let request = Request::post("/deidentify")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"text": "wrong field"}"#))
        .unwrap();
    let (status, _) = send(app(Ok("{}"), RecordingTagger::default()), request).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn notes_over_two_megabytes_are_accepted() {
    let note = "a ".repeat(1_100_000);
    let tagger = RecordingTagger::default();
    let (status, body) = send(app(Ok("no json"), tagger), post_note(&note)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deidentified_note"].as_str().map(str::len), Some(note.trim_end().len()));
    assert_eq!(body["replacements"], json!([]));
}
