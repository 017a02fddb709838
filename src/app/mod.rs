//! 业务模块和路由组装

pub mod product;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::core::middleware::request_logging_middleware;
use product::ProductService;

/// 组装完整的应用路由
pub fn router(product_service: ProductService) -> Router {
    Router::new().merge(product::routes(product_service)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_logging_middleware)),
    )
}
