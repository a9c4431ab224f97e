use std::sync::Arc;
use banktopup::config::AppConfig;
use banktopup::services::topup_service::TopupService;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Initialize environment
    let app_config = get_app_config();

    //Instantiate service
    let topup_service = TopupService::from_config(&app_config);
    info!("Using endpoint {}", app_config.base_url);

    let result = topup_service.execute(app_config.command.clone()).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

pub fn get_app_config() -> Arc<AppConfig> {
    dotenv::dotenv().ok();
    let app_config = Arc::new(AppConfig::parse());
    app_config
}
