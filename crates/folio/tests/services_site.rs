use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use folio::content::ContentCatalog;
use folio::forms::{services_form, SubmissionPayload, SubmitError, SubmitHandler};
use folio::page::ServicesPage;
use folio::site::{services_router, ServicesSite, INQUIRY_API_PATH};
use serde_json::{json, Value};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingHandler {
    received: Mutex<Vec<SubmissionPayload>>,
}

impl RecordingHandler {
    fn received(&self) -> Vec<SubmissionPayload> {
        self.received.lock().expect("handler mutex").clone()
    }
}

impl SubmitHandler for RecordingHandler {
    fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        self.received
            .lock()
            .expect("handler mutex")
            .push(payload.clone());
        Ok(())
    }
}

struct OfflineHandler;

impl SubmitHandler for OfflineHandler {
    fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmitError> {
        Err(SubmitError::Transport("crm offline".to_string()))
    }
}

fn site<H: SubmitHandler + 'static>(handler: Arc<H>) -> axum::Router {
    let page = ServicesPage::new(
        ContentCatalog::standard(),
        services_form().expect("services form"),
        "/assets",
    );
    services_router(Arc::new(ServicesSite::new(page, handler)))
}

fn form_post(body: &str) -> Request<Body> {
    Request::post("/services/inquiry")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn json_post(body: &Value) -> Request<Body> {
    Request::post(INQUIRY_API_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("json body")))
        .expect("request builds")
}

async fn read_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

async fn read_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

fn expected_fields() -> BTreeMap<String, String> {
    [
        ("name", "Ana"),
        ("email", "ana@example.com"),
        ("inquiryType", "Web Development"),
        ("message", "Hi"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

#[tokio::test]
async fn services_page_is_served_as_html() {
    for path in ["/", "/services"] {
        let response = site(Arc::new(RecordingHandler::default()))
            .oneshot(Request::get(path).body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let html = read_text(response).await;
        assert!(html.contains("Get in Touch"));
        assert!(html.contains("Pricing Plans"));
    }
}

#[tokio::test]
async fn valid_form_post_submits_once_and_clears_the_form() {
    let handler = Arc::new(RecordingHandler::default());

    let response = site(handler.clone())
        .oneshot(form_post(
            "name=Ana&email=ana%40example.com&inquiryType=Web+Development&message=Hi",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let html = read_text(response).await;
    assert!(html.contains("form-notice success"));
    assert!(!html.contains("value=\"Ana\""));

    let received = handler.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].fields(), &expected_fields());
}

#[tokio::test]
async fn invalid_form_post_rerenders_with_errors() {
    let handler = Arc::new(RecordingHandler::default());

    let response = site(handler.clone())
        .oneshot(form_post("name=&email=bad&inquiryType=&plan=&message="))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let html = read_text(response).await;
    assert!(html.contains(">Name is required</p>"));
    assert!(html.contains(">Invalid email</p>"));
    assert!(html.contains(">Please select an inquiry type</p>"));
    assert!(html.contains(">Message is required</p>"));
    assert!(html.contains("value=\"bad\""));
    assert!(handler.received().is_empty());
}

#[tokio::test]
async fn form_post_reports_delivery_failures() {
    let response = site(Arc::new(OfflineHandler))
        .oneshot(form_post(
            "name=Ana&email=ana%40example.com&inquiryType=Web+Development&message=Hi",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = read_text(response).await;
    assert!(html.contains("form-notice failure"));
    assert!(html.contains("value=\"Ana\""));
}

#[tokio::test]
async fn api_accepts_valid_inquiries() {
    let handler = Arc::new(RecordingHandler::default());
    let request = json!({
        "name": "Ana",
        "email": "ana@example.com",
        "inquiryType": "Web Development",
        "message": "Hi",
    });

    let response = site(handler.clone())
        .oneshot(json_post(&request))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json(response).await;
    assert_eq!(payload["status"], "received");
    assert_eq!(payload["fields"], request);
    assert!(payload["received_at"].is_string());
    assert_eq!(handler.received().len(), 1);
}

#[tokio::test]
async fn api_reports_every_failing_field() {
    let handler = Arc::new(RecordingHandler::default());

    let response = site(handler.clone())
        .oneshot(json_post(&json!({
            "name": "",
            "email": "bad",
            "inquiryType": "",
            "message": "",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(
        payload["errors"],
        json!({
            "name": "Name is required",
            "email": "Invalid email",
            "inquiryType": "Please select an inquiry type",
            "message": "Message is required",
        })
    );
    assert!(handler.received().is_empty());
}

#[tokio::test]
async fn api_accepts_optional_plan_and_ignores_unknown_fields() {
    let handler = Arc::new(RecordingHandler::default());

    let response = site(handler.clone())
        .oneshot(json_post(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "inquiryType": "UI/UX Design",
            "plan": "Sustainable",
            "message": "Hi",
            "referrer": "newsletter",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let received = handler.received();
    assert_eq!(received[0].get("plan"), Some("Sustainable"));
    assert!(received[0].get("referrer").is_none());
}

#[tokio::test]
async fn api_maps_delivery_failures_to_bad_gateway() {
    let response = site(Arc::new(OfflineHandler))
        .oneshot(json_post(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "inquiryType": "Web Development",
            "message": "Hi",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("crm offline"));
}

#[tokio::test]
async fn api_treats_null_fields_as_absent() {
    let handler = Arc::new(RecordingHandler::default());

    let response = site(handler.clone())
        .oneshot(json_post(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "inquiryType": "Web Development",
            "message": "Hi",
            "plan": null,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json(response).await;
    assert!(payload["fields"].get("plan").is_none());
    let received = handler.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].fields(), &expected_fields());
}

#[tokio::test]
async fn api_reports_null_required_fields_as_missing() {
    let response = site(Arc::new(RecordingHandler::default()))
        .oneshot(json_post(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "inquiryType": "Web Development",
            "message": null,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json(response).await;
    assert_eq!(payload["errors"], json!({ "message": "Message is required" }));
}

#[tokio::test]
async fn api_answers_malformed_bodies_with_json() {
    let handler = Arc::new(RecordingHandler::default());

    let response = site(handler.clone())
        .oneshot(json_post(&json!({
            "name": "Ana",
            "email": "ana@example.com",
            "inquiryType": "Web Development",
            "message": 42,
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("application/json"));
    let payload = read_json(response).await;
    assert!(payload["error"].is_string());
    assert!(handler.received().is_empty());
}
