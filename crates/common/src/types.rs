//! 通用类型定义
//!
//! 数据库主键均为 BIGSERIAL，对应 i64 newtype。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// 菜单项 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct MenuItemId(pub i64);

/// 订单 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct OrderId(pub i64);

/// 用户 ID
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct UserId(pub i64);
