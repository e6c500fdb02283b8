//! 订单命令定义

use bento_common::{MenuItemId, UserId};
use bento_cqrs_core::Command;

use crate::domain::entities::Order;

/// 订单行请求：(菜单项, 数量)
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
}

/// 创建订单
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub user_id: UserId,
    pub lines: Vec<OrderLine>,
}

impl Command for CreateOrderCommand {
    type Result = Order;
}
