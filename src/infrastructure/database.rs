//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::{str::FromStr, time::Duration};
use tracing::info;

use crate::config::DatabaseConfig;

/// 产品表结构，启动时按需创建
const CREATE_PRODUCT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS product (
        id INTEGER NOT NULL PRIMARY KEY,
        name VARCHAR(100) NOT NULL UNIQUE,
        description VARCHAR(250) NOT NULL,
        price FLOAT NOT NULL,
        qty INTEGER NOT NULL
    )
"#;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 打开 (必要时创建) 数据库文件并建表
    pub async fn new(config: &DatabaseConfig) -> Result<Self, Error> {
        info!("Opening database: {}", config.path.display());

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(8))
            .connect_with(options)
            .await?;

        let manager = Self { pool };
        manager.init_schema().await?;
        Ok(manager)
    }

    /// 内存数据库，只保留一个长期连接，否则每个连接各自是一个空库
    pub async fn in_memory() -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let manager = Self { pool };
        manager.init_schema().await?;
        Ok(manager)
    }

    async fn init_schema(&self) -> Result<(), Error> {
        sqlx::query(CREATE_PRODUCT_TABLE)
            .execute(&self.pool)
            .await?;
        info!("Product table ready");
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 关闭连接池，等待已借出的连接归还
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
