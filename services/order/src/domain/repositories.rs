//! 订单 Repository trait

use async_trait::async_trait;
use bento_common::{OrderId, UserId};
use bento_errors::AppResult;

use crate::domain::entities::{NewOrder, Order};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 查询全部订单
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    /// 根据 ID 查找订单，缺失返回 Ok(None)
    async fn find_by_id(&self, id: OrderId) -> AppResult<Option<Order>>;

    /// 查询某用户的全部订单
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Order>>;

    /// 保存订单及其订单行（同一事务），返回带数据库分配 ID 的记录
    async fn save(&self, order: &NewOrder) -> AppResult<Order>;
}
