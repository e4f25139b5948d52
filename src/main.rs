use anyhow::Context;
use product_catalog::{
    app::product::{handler::AppState, store::ProductStore},
    build_router,
    core::{config::AppConfig, middleware::ApiKey},
    infrastructure::logger::Logger,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    Logger::init();

    let config = AppConfig::from_env().context("加载配置失败")?;

    let store = ProductStore::seeded();
    info!("✅ 已初始化 {} 个示例产品", store.len().await);

    let state = AppState::new(store, ApiKey::new(config.api_key.as_str()));
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 产品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /                  - 欢迎信息");
    info!("   GET    /api/products      - 产品列表 (category, search, page, limit)");
    info!("   GET    /api/products/:id  - 获取产品");
    info!("   POST   /api/products      - 创建产品 (需要 x-api-key)");
    info!("   PUT    /api/products/:id  - 更新产品 (需要 x-api-key)");
    info!("   DELETE /api/products/:id  - 删除产品 (需要 x-api-key)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("监听关闭信号失败: {}", e);
    }
}
