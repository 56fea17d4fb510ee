//! 服务器配置

use std::str::FromStr;

/// Document store backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// In-process store (data lives as long as the process)
    #[default]
    Memory,
    /// Embedded SurrealDB on RocksDB
    Surreal,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "surreal" | "surrealdb" => Ok(StoreBackend::Surreal),
            other => Err(format!("unknown store backend: {other}")),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | STORE_BACKEND | memory | 存储后端 (memory / surreal) |
/// | DATABASE_PATH | ./data/restaurant.db | SurrealDB 数据目录 |
/// | DATABASE_NAMESPACE | restaurant | SurrealDB namespace |
/// | DATABASE_NAME | restaurant_management | SurrealDB database |
/// | REQUEST_TIMEOUT_MS | 100000 | 单请求截止时间(毫秒) |
/// | PATCH_UPSERT | false | PATCH 对不存在的记录执行 upsert |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (unset) | 日志目录，设置后按天滚动写文件 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=9000 STORE_BACKEND=surreal cargo run --features surreal
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub store_backend: StoreBackend,
    pub database_path: String,
    pub database_namespace: String,
    pub database_name: String,
    /// 单请求截止时间 (毫秒)，覆盖该请求的全部存储调用
    pub request_timeout_ms: u64,
    /// PATCH 不存在的记录时插入而不是返回 NotFound
    pub patch_upsert: bool,
    pub log_level: String,
    pub log_dir: Option<String>,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_or("HTTP_PORT", 8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            store_backend: env_or("STORE_BACKEND", StoreBackend::Memory),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/restaurant.db".into()),
            database_namespace: std::env::var("DATABASE_NAMESPACE")
                .unwrap_or_else(|_| "restaurant".into()),
            database_name: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "restaurant_management".into()),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 100_000),
            patch_upsert: env_or("PATCH_UPSERT", false),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    /// Defaults without consulting the environment (tests)
    fn default() -> Self {
        Self {
            http_port: 8000,
            environment: "development".into(),
            store_backend: StoreBackend::Memory,
            database_path: "./data/restaurant.db".into(),
            database_namespace: "restaurant".into(),
            database_name: "restaurant_management".into(),
            request_timeout_ms: 100_000,
            patch_upsert: false,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
