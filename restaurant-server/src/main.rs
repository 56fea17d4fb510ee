use restaurant_server::core::StoreBackend;
use restaurant_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    print_banner();

    tracing::info!(
        environment = %config.environment,
        backend = ?config.store_backend,
        "Restaurant server starting..."
    );

    if config.is_production() && config.store_backend == StoreBackend::Memory {
        tracing::warn!("STORE_BACKEND=memory in production: data is lost on restart");
    }

    // 2. 初始化服务器状态 (打开存储)
    let state = ServerState::initialize(&config).await?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
