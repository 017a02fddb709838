//! 核心中间件模块

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// 回写到响应头的请求 ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 请求日志中间件
///
/// 为每个请求生成请求 ID，处理器内的日志都挂在同一个 span 下。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "request",
        %request_id,
        method = %req.method(),
        uri = %req.uri(),
    );
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let mut response = next.run(req).instrument(span.clone()).await;

    span.in_scope(|| {
        info!(
            "{} - {}ms - User-Agent: {:?}",
            response.status(),
            start.elapsed().as_millis(),
            user_agent
        )
    });

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
