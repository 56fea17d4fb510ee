//! Restaurant Server - 餐厅管理服务
//!
//! # 架构概述
//!
//! 菜单、菜品、桌台、订单、订单明细、发票的 CRUD，以及其上的
//! 一致性与聚合层：
//!
//! - **存储网关** (`db`): 文档存储抽象，内置内存后端，可选 SurrealDB 后端
//! - **一致性** (`consistency`): 外键校验、部分更新、级联删除
//! - **聚合** (`aggregation`): 分页列表、点单排行、发票视图
//! - **HTTP API** (`api`): RESTful 接口
//!
//! # 模块结构
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── db/            # 存储网关、后端、仓储
//! ├── consistency/   # 外键、补丁、级联
//! ├── aggregation/   # 读聚合
//! ├── services/      # 各实体业务流程
//! ├── api/           # HTTP 路由和处理器
//! ├── middleware/    # 请求日志、截止时间
//! ├── routes/        # 路由装配
//! └── utils/         # 工具函数
//! ```

pub mod aggregation;
pub mod api;
pub mod consistency;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use db::{DocumentStore, MemoryStore};
pub use routes::build_app;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env 并初始化日志
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv() {
        // .env 是可选的
        eprintln!("No .env loaded: {e}");
    }
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
    ____            __                              __
   / __ \___  _____/ /_____ ___  ___________ _____  / /_
  / /_/ / _ \/ ___/ __/ __ `/ / / / ___/ __ `/ __ \/ __/
 / _, _/  __(__  ) /_/ /_/ / /_/ / /  / /_/ / / / / /_
/_/ |_|\___/____/\__/\__,_/\__,_/_/   \__,_/_/ /_/\__/
    "#
    );
}
