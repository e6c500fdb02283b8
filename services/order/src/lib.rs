//! Order Service Library
//!
//! 模块化架构：
//! - `domain`: 订单实体、仓储接口、菜单查询端口
//! - `application`: 订单创建工作流（价格解析 + 总价计算 + 持久化编排）
//! - `infrastructure`: PostgreSQL 仓储实现、菜单服务 HTTP 客户端
//! - `api`: HTTP 路由与 DTO

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
