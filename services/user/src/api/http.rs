//! 用户 HTTP 路由
//!
//! GET  /api/users        全部用户
//! GET  /api/users/{id}   单个用户（缺失返回 404）
//! POST /api/users        创建用户

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use bento_common::UserId;
use bento_cqrs_core::CommandHandler;
use bento_errors::{AppError, AppResult};
use serde::Deserialize;

use crate::application::commands::CreateUserCommand;
use crate::application::handlers::CreateUserHandler;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_repo: Arc<dyn UserRepository>,
    pub create_handler: Arc<CreateUserHandler>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users))
}

async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<User>> {
    let user = state
        .user_repo
        .find_by_id(UserId(id))
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", id)))?;

    Ok(Json(user))
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .create_handler
        .handle(CreateUserCommand {
            username: request.username,
            password: request.password,
            email: request.email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::domain::repositories::MockUserRepository;

    fn state_with(repo: MockUserRepository) -> AppState {
        let repo: Arc<dyn UserRepository> = Arc::new(repo);
        AppState {
            user_repo: repo.clone(),
            create_handler: Arc::new(CreateUserHandler::new(repo)),
        }
    }

    #[tokio::test]
    async fn list_users_returns_all_records() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().returning(|| {
            Ok(vec![User {
                id: UserId(1),
                username: "testuser".to_string(),
                password: "password".to_string(),
                email: "test@example.com".to_string(),
            }])
        });

        let app = routes(state_with(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["username"], "testuser");
    }

    #[tokio::test]
    async fn get_missing_user_returns_404() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let app = routes(state_with(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/users/9")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
