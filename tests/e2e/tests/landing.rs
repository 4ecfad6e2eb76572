use e2e::{browser::Browser, test_server::TestServer};
use std::time::Duration;

const HYDRATE: Duration = Duration::from_secs(20);

#[tokio::test]
async fn test_language_gate_blocks_content_until_choice() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.wait_for(".language_gate", HYDRATE)
        .expect("Language gate should render");
    assert_eq!(page.count(".gate_choice"), 2, "Both languages should be offered");
    assert!(!page.exists("#hero"), "Hero must stay hidden behind the gate");

    page.click(".gate_choice[data-lang='es']")
        .expect("Failed to pick Spanish");
    page.wait_for("#hero", HYDRATE).expect("Hero should render");

    let nav = page.text_of(".header_nav").expect("Header nav should render");
    assert!(nav.contains("PROYECTOS"), "Navigation should be in Spanish: {nav}");
    assert!(!page.exists(".language_gate"));
}

#[tokio::test]
async fn test_project_modal_opens_and_closes() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click(".gate_choice[data-lang='en']")
        .expect("Failed to pick English");
    page.click(".project_card").expect("Failed to open project");

    page.wait_for(".modal_panel", HYDRATE).expect("Modal should open");
    assert_eq!(page.count(".carousel_dot"), 4, "Finca gallery has four images");

    page.press_key("Escape").expect("Failed to press Escape");
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!page.exists(".modal_panel"), "Escape should close the modal");
}

#[tokio::test]
async fn test_contact_form_blocks_invalid_submit() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click(".gate_choice[data-lang='en']")
        .expect("Failed to pick English");
    page.type_text("#email", "not-an-email")
        .expect("Failed to type email");
    page.click(".contact_submit").expect("Failed to submit");

    page.wait_for(".field_error", HYDRATE)
        .expect("Validation errors should show");
    assert_eq!(
        page.text_of("#email-error").expect("Email error should show"),
        "Please enter a valid email address."
    );
    assert!(!page.exists(".contact_success"));
}

#[tokio::test]
async fn test_contact_form_success_in_local_mode() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to create page");
    page.goto(server.url()).expect("Failed to navigate");

    page.click(".gate_choice[data-lang='en']")
        .expect("Failed to pick English");
    page.type_text("#fullName", "Ana Rojas").expect("name");
    page.type_text("#email", "ana@example.cr").expect("email");
    page.type_text("#phone", "+506 8888 0000").expect("phone");
    page.type_text("#projectDescription", "Natural pool on two hectares.")
        .expect("description");
    page.click(".contact_submit").expect("Failed to submit");

    let title = page
        .text_of(".contact_success h3")
        .expect("Success message should show");
    assert_eq!(title, "Message Sent Successfully!");
}
