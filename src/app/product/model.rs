//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品记录，字段顺序即 JSON 输出顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

/// 创建和更新共用的请求体，四个字段都必须提供
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub qty: i64,
}
