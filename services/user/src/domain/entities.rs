//! 用户实体

use bento_common::UserId;
use serde::{Deserialize, Serialize};

/// 用户实体
///
/// password 作为不透明字符串原样保存，未引入哈希。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password: String,
    pub email: String,
}

/// 待持久化的用户，id 由数据库分配
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
}
