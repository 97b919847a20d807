//! Server startup

use crate::config::Config;
use crate::server::routes::forms::FORMS;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use tracing::info;

/// Build the real provider clients and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting creative relay v{}", crate::VERSION);

    let server = HttpServer::new(&config)?;
    info!(
        "Server starting at: http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!("API Endpoints:");
    info!("   GET  /health");
    info!("   POST /api/upload-image");
    info!("   POST /api/text-to-image");
    info!("   GET  /api/poll-image-status/{{taskId}}");
    info!("   POST /api/generate-video");
    info!("   GET  /api/check-status/{{taskId}}");
    info!("   POST {} marketing forms under /api/<category>/<form>", FORMS.len());

    server.start().await
}
