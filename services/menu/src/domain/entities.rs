//! 菜单项实体

use bento_common::MenuItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 菜单项实体
///
/// 创建后不可修改（没有更新路径），被订单引用时按创建时价格结算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

/// 待持久化的菜单项，id 由数据库分配
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
