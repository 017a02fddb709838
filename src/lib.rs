//! # 产品 CRUD 服务
//!
//! 基于 Axum + SQLx (SQLite) 的单资源 REST 服务：
//! - `app` - 产品模型、存储服务、处理器和路由
//! - `core` - 错误类型、响应结构、请求日志中间件
//! - `infrastructure` - 数据库连接和日志初始化
//! - `config` - TOML 配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::product::{NewProduct, Product, ProductService};
pub use app::router;
pub use config::{Config, ConfigError};
pub use crate::core::error::AppError;
pub use infrastructure::DatabaseManager;
