//! User Service - 用户服务入口
//!
//! 使用 bento-bootstrap 统一启动模式

use std::sync::Arc;

use bento_bootstrap::run;
use bento_errors::AppError;
use user_service::api::{self, AppState};
use user_service::application::handlers::CreateUserHandler;
use user_service::domain::repositories::UserRepository;
use user_service::infrastructure::persistence::PostgresUserRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run("config", |infra| async move {
        let pool = infra.postgres_pool();

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {}", e)))?;

        // 组装 Repository 与处理器（构造注入，无全局单例）
        let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));
        let create_handler = Arc::new(CreateUserHandler::new(user_repo.clone()));

        Ok(api::routes(AppState {
            user_repo,
            create_handler,
        }))
    })
    .await
}
