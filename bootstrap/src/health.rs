//! 健康检查模块
//!
//! 提供 /health 和 /ready 端点

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use sqlx::PgPool;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查路由，由 starter 合并进服务路由
pub fn health_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .with_state(pool)
}

/// Liveness 端点处理器
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::healthy()))
}

/// Readiness 端点处理器
async fn ready_handler(State(pool): State<PgPool>) -> impl IntoResponse {
    let mut status = HealthStatus::healthy();

    let postgres = match bento_adapter_postgres::check_connection(&pool).await {
        Ok(()) => ComponentHealth::healthy("postgres"),
        Err(e) => ComponentHealth::unhealthy("postgres", e.to_string()),
    };
    status.add_check(postgres);

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_check_flips_overall_status() {
        let mut status = HealthStatus::healthy();
        status.add_check(ComponentHealth::healthy("postgres"));
        assert!(status.is_healthy());

        status.add_check(ComponentHealth::unhealthy("postgres", "connection refused"));
        assert!(!status.is_healthy());
    }
}
