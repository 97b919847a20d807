//! Configuration loading tests

#[cfg(test)]
mod tests {
    use creative_relay::config::{Config, RelayConfig};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_then_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
server:
  port: 8080
  cors:
    allowed_origins: ["https://app.example.com"]
providers:
  openrouter:
    model: "anthropic/claude-3.5-sonnet"
  sendgrid:
    default_sender: "marketing@example.com"
logging:
  level: "info"
  json: true
"#,
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        let mut relay: RelayConfig = config.relay.clone();

        let env: HashMap<&str, &str> = HashMap::from([
            ("PORT", "9090"),
            ("OPENROUTER_API_KEY", "sk-or-env"),
            ("RUNWAYML_API_SECRET", "key_env"),
            ("OPENROUTER_MODEL", "  "),
        ]);
        relay.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(relay.server.port, 9090);
        assert_eq!(relay.providers.openrouter.model, "anthropic/claude-3.5-sonnet");
        assert_eq!(
            relay.providers.openrouter.api_key.as_ref().map(|k| k.expose()),
            Some("sk-or-env")
        );
        assert_eq!(
            relay.providers.runway.api_key.as_ref().map(|k| k.expose()),
            Some("key_env")
        );
        assert_eq!(relay.providers.sendgrid.default_sender, "marketing@example.com");
        assert!(!relay.server.cors.allows_all_origins());
        assert!(relay.logging.json);
    }

    #[tokio::test]
    async fn test_load_without_file_uses_defaults() {
        let config = Config::load("definitely/not/here.yaml").await.unwrap();
        assert_eq!(config.server().max_body_size, 50 * 1024 * 1024);
        assert!(config.server().cors.allows_all_origins());
    }

    #[tokio::test]
    async fn test_invalid_yaml_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server: [unterminated").unwrap();

        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
