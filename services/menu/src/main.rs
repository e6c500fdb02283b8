//! Menu Service - 菜单服务入口
//!
//! 使用 bento-bootstrap 统一启动模式

use std::sync::Arc;

use bento_bootstrap::run;
use bento_errors::AppError;
use menu_service::api::{self, AppState};
use menu_service::application::handlers::{CreateMenuItemHandler, DeleteMenuItemHandler};
use menu_service::domain::repositories::MenuItemRepository;
use menu_service::infrastructure::persistence::PostgresMenuItemRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run("config", |infra| async move {
        let pool = infra.postgres_pool();

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {}", e)))?;

        // 组装 Repository 与处理器（构造注入，无全局单例）
        let menu_repo: Arc<dyn MenuItemRepository> =
            Arc::new(PostgresMenuItemRepository::new(pool));
        let create_handler = Arc::new(CreateMenuItemHandler::new(menu_repo.clone()));
        let delete_handler = Arc::new(DeleteMenuItemHandler::new(menu_repo.clone()));

        Ok(api::routes(AppState {
            menu_repo,
            create_handler,
            delete_handler,
        }))
    })
    .await
}
