//! 核心层：错误处理、中间件、响应结构和配置

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
