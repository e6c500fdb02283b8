//! 菜单命令定义

use bento_common::MenuItemId;
use bento_cqrs_core::Command;
use rust_decimal::Decimal;

use crate::domain::entities::MenuItem;

/// 创建菜单项
#[derive(Debug, Clone)]
pub struct CreateMenuItemCommand {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl Command for CreateMenuItemCommand {
    type Result = MenuItem;
}

/// 删除菜单项
#[derive(Debug, Clone)]
pub struct DeleteMenuItemCommand {
    pub id: MenuItemId,
}

impl Command for DeleteMenuItemCommand {
    type Result = ();
}
