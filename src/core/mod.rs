//! 跨业务模块共用的错误、响应和中间件

pub mod error;
pub mod middleware;
pub mod response;

pub use error::AppError;
pub use response::MessageResponse;
