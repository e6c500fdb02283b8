//! 用户命令定义

use bento_cqrs_core::Command;

use crate::domain::entities::User;

/// 创建用户
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl Command for CreateUserCommand {
    type Result = User;
}
