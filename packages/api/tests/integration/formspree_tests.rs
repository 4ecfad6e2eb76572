use std::time::Duration;

use api::transport::{ContactTransport, FormspreeTransport};
use api::types::{ContactRequest, SubmitTransport, CONTACT_SUBJECT};
use wiremock::{
    matchers::{body_partial_json, body_string_contains, header, header_regex, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn request() -> ContactRequest {
    ContactRequest {
        full_name: "Ana Rojas".to_string(),
        email: "ana@example.cr".to_string(),
        phone: "+506 8888 0000".to_string(),
        contact_time: "Weekday mornings".to_string(),
        project_description: "Food forest on a former pasture.".to_string(),
    }
}

fn transport(server: &MockServer) -> FormspreeTransport {
    FormspreeTransport::new(format!("{}/f/test", server.uri()), Duration::from_secs(5))
        .expect("client builds")
}

async fn mount_form(server: &MockServer, status: u16, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/f/test"))
        .and(header("accept", "application/json"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .and(body_string_contains("name=\"fullName\""))
        .and(body_string_contains("Ana Rojas"))
        .and(body_string_contains("name=\"email\""))
        .and(body_string_contains("ana@example.cr"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"ok\":true}"))
        .expect(expected)
        .mount(server)
        .await;
}

async fn mount_json(server: &MockServer, status: u16, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/f/test"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "fullName": "Ana Rojas",
            "_replyto": "ana@example.cr",
            "_subject": CONTACT_SUBJECT,
        })))
        .respond_with(
            ResponseTemplate::new(status).set_body_string("{\"errors\":[{\"message\":\"nope\"}]}"),
        )
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_form_submission_succeeds_without_fallback() {
    let server = MockServer::start().await;
    mount_form(&server, 200, 1).await;
    mount_json(&server, 200, 0).await;

    let outcome = transport(&server).deliver(&request()).await.unwrap();

    assert_eq!(outcome, SubmitTransport::Multipart);
}

#[tokio::test]
async fn test_rejected_form_falls_back_to_json() {
    let server = MockServer::start().await;
    mount_form(&server, 500, 1).await;
    mount_json(&server, 200, 1).await;

    let outcome = transport(&server).deliver(&request()).await.unwrap();

    assert_eq!(outcome, SubmitTransport::Json);
}

#[tokio::test]
async fn test_fallback_is_attempted_only_once() {
    let server = MockServer::start().await;
    mount_form(&server, 400, 1).await;
    mount_json(&server, 422, 1).await;

    let err = transport(&server).deliver(&request()).await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("422"), "unexpected error: {message}");
    assert!(message.contains("nope"), "body should be surfaced: {message}");
}

#[tokio::test]
async fn test_unreachable_endpoint_reports_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let transport = FormspreeTransport::new(format!("{uri}/f/test"), Duration::from_secs(2))
        .expect("client builds");

    assert!(transport.deliver(&request()).await.is_err());
}
