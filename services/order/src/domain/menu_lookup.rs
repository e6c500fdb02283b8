//! 菜单查询端口
//!
//! 远程调用被显式建模为可失败、有延迟的操作，
//! 不假定进程内语义。

use async_trait::async_trait;
use bento_common::MenuItemId;
use bento_errors::AppResult;
use rust_decimal::Decimal;
use serde::Deserialize;

/// 菜单服务返回的菜单项视图
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemView {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuLookup: Send + Sync {
    /// 根据 ID 获取菜单项
    ///
    /// 未知 ID 返回 NotFound，传输层故障返回 ExternalService。
    async fn menu_item_by_id(&self, id: MenuItemId) -> AppResult<MenuItemView>;
}
