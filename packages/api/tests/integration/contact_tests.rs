use api::test_utils::{RecordingTransport, TestContext};
use api::types::{ContactRequest, SubmitTransport};

fn request() -> ContactRequest {
    ContactRequest {
        full_name: "  Ana Rojas ".to_string(),
        email: "ana@example.cr".to_string(),
        phone: "+506 8888 0000".to_string(),
        contact_time: String::new(),
        project_description: "Biofiltered pool for a family retreat.".to_string(),
    }
}

#[tokio::test]
async fn test_submit_contact_delivers_normalized_request() {
    let ctx = TestContext::new();
    ctx.set_global();

    let receipt = api::submit_contact(request())
        .await
        .expect("submission should succeed");

    assert_eq!(receipt.transport, SubmitTransport::Multipart);
    let sent = ctx.transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].full_name, "Ana Rojas");
}

#[tokio::test]
async fn test_submit_contact_rejects_invalid_request_before_sending() {
    let ctx = TestContext::new();
    ctx.set_global();

    let mut invalid = request();
    invalid.email = "not-an-email".to_string();
    invalid.phone = String::new();

    let err = api::submit_contact(invalid)
        .await
        .expect_err("invalid request must be rejected");

    let message = err.to_string();
    assert!(message.contains("email"), "unexpected error: {message}");
    assert!(message.contains("phone"), "unexpected error: {message}");
    assert!(ctx.transport.requests().is_empty());
}

#[tokio::test]
async fn test_submit_contact_surfaces_transport_failure() {
    let ctx = TestContext::with_transport(RecordingTransport::failing(
        "Form submission failed with status: 503",
    ));
    ctx.set_global();

    let err = api::submit_contact(request())
        .await
        .expect_err("delivery failure must surface");

    assert!(err.to_string().contains("503"));
    assert_eq!(ctx.transport.requests().len(), 1);
}

#[tokio::test]
async fn test_public_config_exposes_whatsapp_number() {
    let ctx = TestContext::new();
    ctx.set_global();

    let config = api::public_config().await.expect("config");

    assert!(config.local_mode);
    assert_eq!(config.whatsapp_number, "50683021304");
}
