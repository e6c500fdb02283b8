//! bento-cqrs-core - 命令处理核心库
//!
//! Command trait 定义

mod command;

pub use command::*;
