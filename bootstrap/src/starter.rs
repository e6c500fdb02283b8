//! 服务启动器
//!
//! 提供统一的服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use bento_config::AppConfig;
use bento_errors::AppResult;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 这是所有微服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志、追踪）
/// 3. 创建基础设施资源（数据库连接池，带重试）
/// 4. 调用用户提供的闭包构建 axum Router
/// 5. 挂载 /health、/ready 端点与 Trace/CORS 中间件
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use bento_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run("config", |infra| async move {
///         let repo = PostgresMenuItemRepository::new(infra.postgres_pool());
///         Ok(api::routes(repo))
///     })
///     .await
/// }
/// ```
pub async fn run<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 创建基础设施（带重试）
    let infra = Infrastructure::from_config(config.clone()).await?;
    let pool = infra.postgres_pool();

    // 4. 构建服务路由
    let app = router_builder(infra)
        .await?
        .merge(health_routes(pool))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 5. 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
