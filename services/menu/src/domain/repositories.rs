//! 菜单项 Repository trait

use async_trait::async_trait;
use bento_common::MenuItemId;
use bento_errors::AppResult;

use crate::domain::entities::{MenuItem, NewMenuItem};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// 查询全部菜单项
    async fn find_all(&self) -> AppResult<Vec<MenuItem>>;

    /// 根据 ID 查找菜单项，缺失返回 Ok(None)
    async fn find_by_id(&self, id: MenuItemId) -> AppResult<Option<MenuItem>>;

    /// 保存菜单项，返回带数据库分配 ID 的记录
    async fn save(&self, item: &NewMenuItem) -> AppResult<MenuItem>;

    /// 删除菜单项
    async fn delete(&self, id: MenuItemId) -> AppResult<()>;
}
