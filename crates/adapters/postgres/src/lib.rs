//! bento-adapter-postgres - PostgreSQL 适配器
//!
//! 连接池创建与健康检查

mod config;
mod connection;
mod health;

pub use config::*;
pub use connection::*;
pub use health::*;
