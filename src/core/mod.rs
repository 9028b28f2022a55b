//! 核心：错误、响应和中间件

pub mod error;
pub mod middleware;
pub mod response;
