//! Endpoint tests for `POST /send`.

use actix_web::http::StatusCode;
use actix_web::{test, web};
use std::sync::Arc;

use cv_api::app::create_app;
use cv_api::routes::otp::AppState;
use cv_core::repositories::MockUserDirectory;
use cv_core::services::messaging::MessagingServiceTrait;
use cv_core::services::otp::{CodeStoreTrait, OtpService};
use cv_infra::messaging::MockMessagingService;
use cv_infra::store::{InMemoryCodeStore, InMemorySendWindow};
use cv_shared::types::StatusResponse;

struct TestContext {
    state: web::Data<AppState>,
    codes: Arc<InMemoryCodeStore>,
    window: Arc<InMemorySendWindow>,
    messenger: Arc<MockMessagingService>,
}

fn test_context(messenger: MockMessagingService) -> TestContext {
    let codes = Arc::new(InMemoryCodeStore::new());
    let window = Arc::new(InMemorySendWindow::new());
    let messenger = Arc::new(messenger);
    let messaging: Option<Arc<dyn MessagingServiceTrait>> = Some(messenger.clone());

    let otp_service = Arc::new(OtpService::new(
        messaging.clone(),
        codes.clone(),
        window.clone(),
    ));

    let state = web::Data::new(AppState {
        otp_service,
        directory: Arc::new(MockUserDirectory::new()),
        messaging,
    });

    TestContext {
        state,
        codes,
        window,
        messenger,
    }
}

#[actix_web::test]
async fn test_send_delivers_and_stores_code() {
    let ctx = test_context(MockMessagingService::new());
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(serde_json::json!({ "phone": "0912345678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert!(body.success);
    assert_eq!(body.message, "delivered");

    assert_eq!(ctx.messenger.message_count(), 1);
    let record = ctx.codes.get("0912345678").expect("code should be stored");
    let (_, text) = ctx.messenger.last_message().unwrap();
    assert!(text.contains(&record.code));
}

#[actix_web::test]
async fn test_send_without_phone_is_rejected_without_mutation() {
    let ctx = test_context(MockMessagingService::new());
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert!(!body.success);

    // Neither map was touched
    assert!(ctx.codes.is_empty());
    assert_eq!(ctx.window.tracked_count(), 0);
    assert_eq!(ctx.messenger.message_count(), 0);
}

#[actix_web::test]
async fn test_send_with_blank_phone_is_rejected() {
    let ctx = test_context(MockMessagingService::new());
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(serde_json::json!({ "phone": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(ctx.codes.is_empty());
}

#[actix_web::test]
async fn test_send_failure_rolls_back_but_consumes_window_slot() {
    let ctx = test_context(MockMessagingService::failing());
    let app = test::init_service(create_app(ctx.state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(serde_json::json!({ "phone": "0912345678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert!(!body.success);

    // Rollback: the code cannot be verified, yet the attempt counted
    assert!(ctx.codes.is_empty());
    assert_eq!(ctx.window.tracked_count(), 1);
}

#[actix_web::test]
async fn test_fourth_send_within_hour_is_rate_limited() {
    let ctx = test_context(MockMessagingService::new());
    let app = test::init_service(create_app(ctx.state.clone())).await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/send")
            .set_json(serde_json::json!({ "phone": "0912345678" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(serde_json::json!({ "phone": "0912345678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert_eq!(ctx.messenger.message_count(), 3);
}

#[actix_web::test]
async fn test_send_with_absent_channel() {
    let codes = Arc::new(InMemoryCodeStore::new());
    let window = Arc::new(InMemorySendWindow::new());
    let otp_service = Arc::new(OtpService::new(None, codes.clone(), window));
    let state = web::Data::new(AppState {
        otp_service,
        directory: Arc::new(MockUserDirectory::new()),
        messaging: None,
    });
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/send")
        .set_json(serde_json::json!({ "phone": "0912345678" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: StatusResponse = test::read_body_json(resp).await;
    assert!(body.message.contains("pair the device again"));
    assert!(codes.is_empty());
}
