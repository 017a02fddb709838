use anyhow::Context;
use product_api::{
    config::load_config, infrastructure::logger::init_logging, router, DatabaseManager,
    ProductService,
};
use std::{env, path::PathBuf};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 唯一的命令行参数：配置文件路径
    let config_path = env::args().nth(1).map(PathBuf::from);
    let (config, source) = load_config(config_path.as_deref()).context("加载配置失败")?;

    let _log_guard = init_logging(&config.logging).context("初始化日志失败")?;

    match source {
        Some(path) => info!("Loaded config from {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let db = DatabaseManager::new(&config.database).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;

    let product_service = ProductService::new(db.get_pool().clone());
    info!("{} products in store", product_service.count().await?);

    let app = router(product_service);

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("🚀 Product API running on http://{}", listener.local_addr()?);
    info!("   GET    /product      - List products");
    info!("   POST   /product      - Create product");
    info!("   GET    /product/:id  - Get product by ID");
    info!("   PUT    /product/:id  - Update product");
    info!("   DELETE /product/:id  - Delete product");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server stopped");
    Ok(())
}

/// 等待 Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
