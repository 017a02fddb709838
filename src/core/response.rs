//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 只带一条消息的响应体，成功与失败共用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
