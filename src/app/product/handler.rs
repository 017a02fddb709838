//! 产品处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};

use super::{
    model::{NewProduct, Product},
    service::ProductService,
};
use crate::core::{error::AppError, response::MessageResponse};

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 解析路径中的 id，原始文本留给错误消息使用
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|e| AppError::Validation(format!("Invalid product id `{}`: {}", raw, e)))
}

/// GET /product
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_service.list_all().await?;
    Ok(Json(products))
}

/// GET /product/:id
pub async fn get_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Product>, AppError> {
    let Path(raw_id) = raw_id?;
    let id = parse_id(&raw_id)?;

    state
        .product_service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(raw_id))
}

/// POST /product
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(input) = payload?;

    state.product_service.insert(input).await?;
    Ok(Json(MessageResponse::new("Product added successfully.")))
}

/// PUT /product/:id
pub async fn update_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(raw_id) = raw_id?;
    let id = parse_id(&raw_id)?;
    let Json(input) = payload?;

    let product = state
        .product_service
        .update(id, input)
        .await
        .map_err(|e| e.absent_as_unprocessable(&raw_id))?;

    Ok(Json(MessageResponse::new(format!(
        "{} updated successfully.",
        product.name
    ))))
}

/// DELETE /product/:id
pub async fn delete_product(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(raw_id) = raw_id?;
    let id = parse_id(&raw_id)?;

    let product = state
        .product_service
        .delete(id)
        .await
        .map_err(|e| e.absent_as_unprocessable(&raw_id))?;

    Ok(Json(MessageResponse::new(format!(
        "{} has been deleted.",
        product.name
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
        assert!(matches!(parse_id("abc"), Err(AppError::Validation(_))));
        assert!(matches!(parse_id(""), Err(AppError::Validation(_))));
    }
}
