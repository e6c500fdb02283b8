//! 用户 Repository trait

use async_trait::async_trait;
use bento_common::UserId;
use bento_errors::AppResult;

use crate::domain::entities::{NewUser, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 查询全部用户
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 根据 ID 查找用户，缺失返回 Ok(None)
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// 保存用户，返回带数据库分配 ID 的记录
    async fn save(&self, user: &NewUser) -> AppResult<User>;
}
