//! Ganhar terminal client

use ganhar_terminal::app::router::DEFAULT_PATH;
use ganhar_terminal::{debug, shell, App, ClientConfig, Services};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _log_guard = debug::init();

    let config = ClientConfig::from_env();
    tracing::info!(
        api_origin = %config.api_origin,
        config_path = %config.config_path.display(),
        origin_tag = %config.origin_tag,
        "Starting Ganhar terminal"
    );

    let services = Services::from_config(&config);
    let app = App::new(services, config.origin_tag.clone());

    let initial_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_PATH.to_string());

    if let Err(e) = shell::run(app, &initial_path).await {
        tracing::error!(error = %e, "Shell stopped");
        eprintln!("Erro: {}", e.user_message());
        std::process::exit(1);
    }

    tracing::info!("Ganhar terminal exited");
}
