//! 菜单命令处理器

use std::sync::Arc;

use async_trait::async_trait;
use bento_cqrs_core::CommandHandler;
use bento_errors::AppResult;
use tracing::info;

use crate::application::commands::{CreateMenuItemCommand, DeleteMenuItemCommand};
use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::domain::repositories::MenuItemRepository;

/// 创建菜单项处理器
pub struct CreateMenuItemHandler {
    menu_repo: Arc<dyn MenuItemRepository>,
}

impl CreateMenuItemHandler {
    pub fn new(menu_repo: Arc<dyn MenuItemRepository>) -> Self {
        Self { menu_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateMenuItemCommand> for CreateMenuItemHandler {
    async fn handle(&self, command: CreateMenuItemCommand) -> AppResult<MenuItem> {
        let item = self
            .menu_repo
            .save(&NewMenuItem {
                name: command.name,
                description: command.description,
                price: command.price,
            })
            .await?;

        info!(menu_item_id = %item.id, name = %item.name, "Menu item created");

        Ok(item)
    }
}

/// 删除菜单项处理器
pub struct DeleteMenuItemHandler {
    menu_repo: Arc<dyn MenuItemRepository>,
}

impl DeleteMenuItemHandler {
    pub fn new(menu_repo: Arc<dyn MenuItemRepository>) -> Self {
        Self { menu_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteMenuItemCommand> for DeleteMenuItemHandler {
    async fn handle(&self, command: DeleteMenuItemCommand) -> AppResult<()> {
        self.menu_repo.delete(command.id).await?;

        info!(menu_item_id = %command.id, "Menu item deleted");

        Ok(())
    }
}
