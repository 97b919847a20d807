//! Completion client tests

#[cfg(test)]
mod tests {
    use crate::common::{chat_reply, relay_config};
    use creative_relay::core::providers::OpenRouterClient;
    use creative_relay::core::providers::openrouter::{MAX_TOKENS, SYSTEM_PROMPT};
    use creative_relay::core::traits::CompletionProvider;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn openrouter(server: &MockServer) -> OpenRouterClient {
        OpenRouterClient::new(&relay_config(&server.uri()).providers().openrouter).unwrap()
    }

    #[tokio::test]
    async fn test_structured_reply_is_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/openrouter/api/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-or-integration"))
            .and(body_partial_json(json!({
                "model": "openai/gpt-5-chat",
                "max_tokens": MAX_TOKENS,
                "messages": [{"role": "system", "content": SYSTEM_PROMPT}]
            })))
            .respond_with(chat_reply(
                r##"{"ok":true,"captions":[{"length":"short","text":"Sip happens"}],"hashtags":["#coffee"]}"##,
            ))
            .mount(&server)
            .await;

        let result = openrouter(&server).await.complete("captions please", "").await;

        assert_eq!(
            result.into_value(),
            json!({
                "ok": true,
                "captions": [{"length": "short", "text": "Sip happens"}],
                "hashtags": ["#coffee"]
            })
        );
    }

    #[tokio::test]
    async fn test_model_reported_failure_is_relayed_as_is() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(chat_reply(r#"{"ok":false,"error":"not enough input"}"#))
            .mount(&server)
            .await;

        let result = openrouter(&server).await.complete("?", "").await;

        assert!(!result.is_ok());
        assert_eq!(
            result.into_value(),
            json!({"ok": false, "error": "not enough input"})
        );
    }

    #[tokio::test]
    async fn test_fenced_reply_falls_back_to_raw() {
        let server = MockServer::start().await;
        let fenced = "```json\n{\"ok\":true}\n```";
        Mock::given(method("POST"))
            .respond_with(chat_reply(fenced))
            .mount(&server)
            .await;

        let result = openrouter(&server).await.complete("plan", "").await;

        assert_eq!(result.into_value(), json!({"ok": true, "raw": fenced}));
    }

    #[tokio::test]
    async fn test_legacy_text_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": [{"text": "{\"ok\":true,\"n\":2}"}]})),
            )
            .mount(&server)
            .await;

        let result = openrouter(&server).await.complete("plan", "").await;
        assert_eq!(result.into_value(), json!({"ok": true, "n": 2}));
    }

    #[tokio::test]
    async fn test_empty_content_is_no_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(chat_reply(""))
            .mount(&server)
            .await;

        let result = openrouter(&server).await.complete("plan", "").await;
        assert_eq!(
            result.into_value(),
            json!({"ok": false, "error": "no response from model"})
        );
    }

    #[tokio::test]
    async fn test_rate_limit_body_is_error_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
            .mount(&server)
            .await;

        let result = openrouter(&server).await.complete("plan", "").await;
        assert_eq!(
            result.into_value(),
            json!({"ok": false, "error": "Rate limit exceeded"})
        );
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_error_result() {
        let mut config = relay_config("http://127.0.0.1:1");
        config.relay.providers.openrouter.base_url = "http://127.0.0.1:1/api/v1".to_string();
        let client = OpenRouterClient::new(&config.providers().openrouter).unwrap();

        let value = client.complete("plan", "").await.into_value();
        assert_eq!(value["ok"], json!(false));
        assert!(value["error"].as_str().unwrap().starts_with("Network error"));
    }
}
