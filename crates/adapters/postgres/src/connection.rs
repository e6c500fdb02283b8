//! 连接池创建

use bento_errors::{AppError, AppResult};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::debug;

use crate::PostgresConfig;

/// 根据配置创建 PostgreSQL 连接池
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    debug!(
        max_connections = config.max_connections,
        "Creating PostgreSQL pool"
    );

    let mut url = config.url.clone();
    if let Some(name) = &config.application_name {
        let sep = if url.contains('?') { '&' } else { '?' };
        url = format!("{}{}application_name={}", url, sep, name);
    }

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .connect(&url)
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to PostgreSQL: {}", e)))
}
