//! 订单实体

use bento_common::{MenuItemId, OrderId, UserId};
use rust_decimal::Decimal;

/// 订单行：菜单项与数量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
}

/// 订单实体
///
/// 不变量：total_price 等于创建时各行 `单价 × 数量` 之和，
/// 持久化后不再重算、不再修改。
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_price: Decimal,
}

/// 待持久化的订单，id 由数据库分配
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_price: Decimal,
}
