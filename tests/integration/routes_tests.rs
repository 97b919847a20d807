//! End-to-end route tests against mocked providers

#[cfg(test)]
mod tests {
    use crate::common::{chat_reply, relay_config};
    use actix_web::{http::StatusCode, test, web};
    use creative_relay::config::Config;
    use creative_relay::server::{AppState, HttpServer};
    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(config: Config) -> web::Data<AppState> {
        web::Data::new(AppState::from_config(config).unwrap())
    }

    #[actix_web::test]
    async fn test_image_flow_submit_then_poll() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/runway/v1/text_to_image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "abc123"})))
            .mount(&server)
            .await;
        let provider_status = json!({
            "id": "abc123",
            "status": "SUCCEEDED",
            "output": ["https://cdn.example.com/abc123.png"]
        });
        Mock::given(method("GET"))
            .and(path("/runway/v1/tasks/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(provider_status.clone()))
            .mount(&server)
            .await;

        let app =
            test::init_service(HttpServer::create_app(state(relay_config(&server.uri())))).await;

        let req = test::TestRequest::post()
            .uri("/api/text-to-image")
            .set_json(json!({"promptText": "a red fox", "ratio": "1920:1080"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"id": "abc123"}));

        let req = test::TestRequest::get()
            .uri("/api/poll-image-status/abc123")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, provider_status);
    }

    #[actix_web::test]
    async fn test_missing_runway_key_is_submission_failure() {
        let server = MockServer::start().await;
        let mut config = relay_config(&server.uri());
        config.relay.providers.runway.api_key = None;

        let app = test::init_service(HttpServer::create_app(state(config))).await;

        let req = test::TestRequest::post()
            .uri("/api/generate-video")
            .set_json(json!({
                "promptText": "pan left",
                "promptImage": "https://i.ibb.co/x/frame.png",
                "ratio": "1280:720",
                "duration": 5
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Video generation API failed"}));
    }

    #[actix_web::test]
    async fn test_upload_image_through_imgbb() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/imgbb/1/upload"))
            .and(body_string_contains("imgbb-integration"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"url": "https://i.ibb.co/xyz/upload.png"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let app =
            test::init_service(HttpServer::create_app(state(relay_config(&server.uri())))).await;

        let req = test::TestRequest::post()
            .uri("/api/upload-image")
            .set_json(json!({"base64Image": "data:image/png;base64,iVBORw0KGgo="}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"imageUrl": "https://i.ibb.co/xyz/upload.png"}));
    }

    #[actix_web::test]
    async fn test_form_with_plain_text_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openrouter/api/v1/chat/completions"))
            .respond_with(chat_reply("Here are some ideas: ..."))
            .mount(&server)
            .await;

        let app =
            test::init_service(HttpServer::create_app(state(relay_config(&server.uri())))).await;

        let req = test::TestRequest::post()
            .uri("/api/social/caption")
            .set_json(json!({"product": "cold brew"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"ok": true, "raw": "Here are some ideas: ..."}));
    }

    #[actix_web::test]
    async fn test_form_provider_outage_is_still_http_200() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openrouter/api/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(json!({"error": {"code": 503}})),
            )
            .mount(&server)
            .await;

        let app =
            test::init_service(HttpServer::create_app(state(relay_config(&server.uri())))).await;

        let req = test::TestRequest::post()
            .uri("/api/content/blog")
            .set_json(json!({"topic": "remote work"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"ok": false, "error": {"error": {"code": 503}}}));
    }

    #[actix_web::test]
    async fn test_email_campaign_send_now() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openrouter/api/v1/chat/completions"))
            .respond_with(chat_reply(
                r#"{"ok":true,"subject":"Summer launch","htmlBody":"<h1>Hello</h1>"}"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/sendgrid/v3/mail/send"))
            .and(body_partial_json(json!({
                "personalizations": [{"to": [{"email": "qa@example.com"}]}],
                "from": {"email": "no-reply@example.com"},
                "subject": "Summer launch"
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let app =
            test::init_service(HttpServer::create_app(state(relay_config(&server.uri())))).await;

        let req = test::TestRequest::post()
            .uri("/api/email/campaign")
            .set_json(json!({"product": "sunscreen", "sendNow": true, "testTo": "qa@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "ok": true,
                "subject": "Summer launch",
                "htmlBody": "<h1>Hello</h1>",
                "sent": true,
                "sentTo": "qa@example.com"
            })
        );
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(HttpServer::create_app(state(Config::default()))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], json!(true));
    }
}
