//! 产品资源：模型、存储服务和路由

pub mod handler;
pub mod model;
pub mod service;

use axum::{routing::get, Router};

use handler::{
    create_product, delete_product, get_product, list_products, update_product, AppState,
};
pub use model::{NewProduct, Product};
pub use service::ProductService;

pub fn routes(product_service: ProductService) -> Router {
    Router::new()
        .route("/product", get(list_products).post(create_product))
        .route(
            "/product/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(AppState { product_service })
}
