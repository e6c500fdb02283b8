//! Order Service - 订单服务入口
//!
//! 使用 bento-bootstrap 统一启动模式

use std::sync::Arc;
use std::time::Duration;

use bento_bootstrap::run;
use bento_errors::AppError;
use order_service::api::{self, AppState};
use order_service::application::handlers::CreateOrderHandler;
use order_service::domain::menu_lookup::MenuLookup;
use order_service::domain::repositories::OrderRepository;
use order_service::infrastructure::persistence::PostgresOrderRepository;
use order_service::infrastructure::remote::HttpMenuClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run("config", |infra| async move {
        let pool = infra.postgres_pool();
        let config = infra.config();

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| AppError::database(format!("Migration failed: {}", e)))?;

        // 菜单服务客户端（订单创建的远程查价）
        let menu_config = config
            .menu_service
            .as_ref()
            .ok_or_else(|| AppError::internal("menu_service configuration is required"))?;
        let menu_lookup: Arc<dyn MenuLookup> = Arc::new(HttpMenuClient::new(
            &menu_config.base_url,
            Duration::from_secs(menu_config.timeout_secs),
        )?);

        // 组装 Repository 与处理器（构造注入，无全局单例）
        let order_repo: Arc<dyn OrderRepository> = Arc::new(PostgresOrderRepository::new(pool));
        let create_handler = Arc::new(CreateOrderHandler::new(
            order_repo.clone(),
            menu_lookup,
        ));

        Ok(api::routes(AppState {
            order_repo,
            create_handler,
        }))
    })
    .await
}
