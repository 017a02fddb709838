//! 产品存储服务
//!
//! 所有写操作在返回前已经提交，后续读取立即可见。

use sqlx::sqlite::SqlitePool;
use tracing::info;

use super::model::{NewProduct, Product};
use crate::core::error::AppError;

const PRODUCT_COLUMNS: &str = "id, name, description, price, qty";

#[derive(Clone)]
pub struct ProductService {
    pool: SqlitePool,
}

impl ProductService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 全表扫描，按 id 排序
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM product ORDER BY id",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// 按主键查询，不存在时返回 `None`
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {} FROM product WHERE id = ?",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// 新增产品，名称重复时返回 `ConstraintViolation`
    pub async fn insert(&self, input: NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO product (name, description, price, qty) VALUES (?, ?, ?, ?) RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.qty)
        .fetch_one(&self.pool)
        .await?;

        info!("Created product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 覆盖除 id 外的全部字段
    pub async fn update(&self, id: i64, input: NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE product SET name = ?, description = ?, price = ?, qty = ? WHERE id = ? RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(input.qty)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        info!("Updated product: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// 删除并返回被删除的记录
    pub async fn delete(&self, id: i64) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "DELETE FROM product WHERE id = ? RETURNING {}",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        info!("Deleted product: {} ({})", product.name, product.id);
        Ok(product)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
