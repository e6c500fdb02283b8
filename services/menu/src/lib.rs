//! Menu Service Library
//!
//! 模块化架构：
//! - `domain`: 菜单项实体与仓储接口
//! - `application`: 命令与处理器
//! - `infrastructure`: PostgreSQL 仓储实现
//! - `api`: HTTP 路由与 DTO

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
