//! Generation task client tests

#[cfg(test)]
mod tests {
    use crate::common::relay_config;
    use creative_relay::core::poller::{PollError, TaskPoller};
    use creative_relay::core::providers::{MediaTaskError, RunwayClient};
    use creative_relay::core::traits::MediaTaskProvider;
    use creative_relay::core::types::{
        ImageToVideoParams, PromptImage, ReferenceImage, TaskState, TextToImageParams,
    };
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn runway(server: &MockServer) -> RunwayClient {
        RunwayClient::new(&relay_config(&server.uri()).providers().runway).unwrap()
    }

    #[tokio::test]
    async fn test_text_to_image_exact_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/runway/v1/text_to_image"))
            .and(header("authorization", "Bearer key_integration"))
            .and(header("x-runway-version", "2024-11-06"))
            .and(body_json(json!({
                "model": "gen4_image",
                "promptText": "a bottle on a beach",
                "ratio": "1080:1080",
                "referenceImages": [{"uri": "https://i.ibb.co/p/product.png", "tag": "product"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "img-42"})))
            .expect(1)
            .mount(&server)
            .await;

        let params = TextToImageParams::new("a bottle on a beach", "1080:1080").with_reference(
            ReferenceImage {
                uri: "https://i.ibb.co/p/product.png".to_string(),
                tag: Some("product".to_string()),
            },
        );
        let task = runway(&server)
            .await
            .submit_text_to_image(&params)
            .await
            .unwrap();

        assert_eq!(task.task_id, "img-42");
    }

    #[tokio::test]
    async fn test_image_to_video_keyframes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/runway/v1/image_to_video"))
            .and(body_json(json!({
                "model": "gen4_turbo",
                "promptText": "zoom out",
                "promptImage": [{"uri": "https://i.ibb.co/a/first.png", "position": "first"}],
                "ratio": "1280:720",
                "duration": 10,
                "seed": 99
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "vid-7"})))
            .mount(&server)
            .await;

        let params = ImageToVideoParams::new(
            "zoom out",
            serde_json::from_value::<PromptImage>(json!([
                {"uri": "https://i.ibb.co/a/first.png", "position": "first"}
            ]))
            .unwrap(),
            "1280:720",
            10,
        )
        .with_seed(99);
        let task = runway(&server)
            .await
            .submit_image_to_video(&params)
            .await
            .unwrap();

        assert_eq!(task.task_id, "vid-7");
    }

    #[tokio::test]
    async fn test_network_failure_is_submission_error() {
        let mut config = relay_config("http://127.0.0.1:1");
        config.relay.providers.runway.base_url = "http://127.0.0.1:1/v1".to_string();
        let client = RunwayClient::new(&config.providers().runway).unwrap();

        let err = client
            .submit_text_to_image(&TextToImageParams::new("a cat", "1024:1024"))
            .await
            .unwrap_err();
        assert!(matches!(err, MediaTaskError::ProviderSubmission { .. }));
        assert!(err.payload().is_none());
    }

    #[tokio::test]
    async fn test_poller_waits_for_terminal_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/runway/v1/tasks/img-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "PENDING"})))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/runway/v1/tasks/img-42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "SUCCEEDED",
                "output": ["https://cdn.example.com/img-42.png"]
            })))
            .mount(&server)
            .await;

        let client = runway(&server).await;
        let status = TaskPoller::new(Duration::from_millis(5), 10)
            .wait(&client, "img-42")
            .await
            .unwrap();

        assert_eq!(status.state(), Some(TaskState::Succeeded));
        assert_eq!(status.output(), vec!["https://cdn.example.com/img-42.png"]);
    }

    #[tokio::test]
    async fn test_poller_surfaces_query_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/runway/v1/tasks/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = runway(&server).await;
        let err = TaskPoller::new(Duration::from_millis(5), 10)
            .wait(&client, "gone")
            .await
            .unwrap_err();

        match err {
            PollError::Query(e) => assert_eq!(e.payload(), Some(&json!({"error": "Not found"}))),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
