use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use webshop::config::{find_config_file, load_config};
use webshop::infrastructure::{database::DatabaseManager, logger::Logger};
use webshop::{build_router, AppState, PgProductStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_file = find_config_file();
    let config = load_config(config_file).context("加载配置失败")?;
    Logger::init(&config.logging);

    match config_file {
        Some(path) => info!("从配置文件加载: {}", path),
        None => info!("未找到配置文件，使用默认配置"),
    }

    info!("连接数据库: {}", config.database.redacted_url());
    let database = DatabaseManager::new(&config.database).context("数据库连接串无效")?;
    let store = Arc::new(PgProductStore::new(database.get_pool().clone()));

    let app = build_router(AppState::new(store), &config.server);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 Webshop 运行在 http://{}", listener.local_addr()?);
    info!("   GET  /                  - 商品列表");
    info!("   GET  /api/test-supabase - 数据库诊断");
    info!("   GET  /health            - 存活检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;
    Ok(())
}
