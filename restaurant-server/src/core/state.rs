use std::sync::Arc;

use crate::core::Config;
use crate::db::{DocumentStore, StoreResult, open_store};

/// 服务器状态 - 每个请求共享的只读句柄
///
/// 使用 Arc 实现浅拷贝；除存储句柄外请求之间没有共享可变状态。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn DocumentStore> | 文档存储 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储 (启动时打开，关闭时释放)
    pub store: Arc<dyn DocumentStore>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("store", &self.store.backend())
            .finish()
    }
}

impl ServerState {
    /// 创建服务器状态 (手动注入存储，测试使用)
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }

    /// 按配置打开存储并初始化状态
    pub async fn initialize(config: &Config) -> StoreResult<Self> {
        let store = open_store(config).await?;
        tracing::info!(backend = store.backend(), "Document store ready");
        Ok(Self::new(config.clone(), store))
    }

    pub fn store(&self) -> Arc<dyn DocumentStore> {
        self.store.clone()
    }
}
