//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::response::MessageResponse;

/// 核心错误类型
///
/// 除了单条查询的 `NotFound` 返回 404，其余错误统一以 422 返回，
/// 响应体为 `{"message": "<错误文本>"}`。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 指定 id 的产品不存在，保留请求路径中的原始 id 文本
    #[error("Product with the id of {0} cannot be found.")]
    NotFound(String),
    /// 同样是记录不存在，但更新和删除接口以 422 返回
    #[error("Product with the id of {0} cannot be found.")]
    NotFoundUnprocessable(String),
    /// 请求体字段缺失、类型错误或路径参数无法解析
    #[error("{0}")]
    Validation(String),
    /// 违反唯一约束 (产品名称重复)
    #[error("{0}")]
    ConstraintViolation(String),
    /// 其他存储或序列化错误，原样返回错误文本
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotFoundUnprocessable(_)
            | AppError::Validation(_)
            | AppError::ConstraintViolation(_)
            | AppError::Internal(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_) | AppError::NotFoundUnprocessable(_)
        )
    }

    /// 更新和删除接口对不存在的记录沿用 422 通道，消息中使用请求里的 id 文本
    pub fn absent_as_unprocessable(self, requested_id: &str) -> Self {
        match self {
            AppError::NotFound(_) => AppError::NotFoundUnprocessable(requested_id.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::Internal(msg) => error!("Internal error: {}", msg),
            other => warn!("Request failed ({}): {}", status.as_u16(), other),
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::ConstraintViolation(db.message().to_string())
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_id() {
        let err = AppError::NotFound("42".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Product with the id of 42 cannot be found.");
    }

    #[test]
    fn test_other_errors_are_unprocessable() {
        for err in [
            AppError::Validation("missing field `qty`".to_string()),
            AppError::ConstraintViolation("UNIQUE constraint failed: product.name".to_string()),
            AppError::Internal("database is locked".to_string()),
        ] {
            assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[test]
    fn test_absent_as_unprocessable_keeps_not_found_kind() {
        let err = AppError::NotFound("7".to_string()).absent_as_unprocessable("007");
        assert!(err.is_not_found());
        assert!(matches!(err, AppError::NotFoundUnprocessable(_)));
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "Product with the id of 007 cannot be found.");

        let err = AppError::ConstraintViolation("dup".to_string()).absent_as_unprocessable("1");
        assert!(matches!(err, AppError::ConstraintViolation(_)));
    }

    #[test]
    fn test_row_not_found_maps_to_internal() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
