//! 用户命令处理器

use std::sync::Arc;

use async_trait::async_trait;
use bento_cqrs_core::CommandHandler;
use bento_errors::AppResult;
use tracing::info;

use crate::application::commands::CreateUserCommand;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;

/// 创建用户处理器
pub struct CreateUserHandler {
    user_repo: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateUserCommand> for CreateUserHandler {
    async fn handle(&self, command: CreateUserCommand) -> AppResult<User> {
        let user = self
            .user_repo
            .save(&NewUser {
                username: command.username,
                password: command.password,
                email: command.email,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User created");

        Ok(user)
    }
}
