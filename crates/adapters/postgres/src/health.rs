//! 数据库健康检查

use bento_errors::{AppError, AppResult};
use sqlx::PgPool;

/// 检查数据库连接是否可用
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("PostgreSQL health check failed: {}", e)))?;

    Ok(())
}
