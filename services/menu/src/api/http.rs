//! 菜单 HTTP 路由
//!
//! GET    /api/menu        全部菜单项
//! GET    /api/menu/{id}   单个菜单项（缺失返回 404）
//! POST   /api/menu        创建菜单项
//! DELETE /api/menu/{id}   删除菜单项

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use bento_common::MenuItemId;
use bento_cqrs_core::CommandHandler;
use bento_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::commands::{CreateMenuItemCommand, DeleteMenuItemCommand};
use crate::application::handlers::{CreateMenuItemHandler, DeleteMenuItemHandler};
use crate::domain::entities::MenuItem;
use crate::domain::repositories::MenuItemRepository;

#[derive(Clone)]
pub struct AppState {
    pub menu_repo: Arc<dyn MenuItemRepository>,
    pub create_handler: Arc<CreateMenuItemHandler>,
    pub delete_handler: Arc<DeleteMenuItemHandler>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/menu", get(list_menu_items).post(create_menu_item))
        .route("/api/menu/{id}", get(get_menu_item).delete(delete_menu_item))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct CreateMenuItemRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

async fn list_menu_items(State(state): State<AppState>) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.menu_repo.find_all().await?;
    Ok(Json(items))
}

async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .menu_repo
        .find_by_id(MenuItemId(id))
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;

    Ok(Json(item))
}

async fn create_menu_item(
    State(state): State<AppState>,
    Json(request): Json<CreateMenuItemRequest>,
) -> AppResult<(StatusCode, Json<MenuItem>)> {
    let item = state
        .create_handler
        .handle(CreateMenuItemCommand {
            name: request.name,
            description: request.description,
            price: request.price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(item)))
}

async fn delete_menu_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state
        .delete_handler
        .handle(DeleteMenuItemCommand { id: MenuItemId(id) })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::domain::repositories::MockMenuItemRepository;

    fn state_with(repo: MockMenuItemRepository) -> AppState {
        let repo: Arc<dyn MenuItemRepository> = Arc::new(repo);
        AppState {
            menu_repo: repo.clone(),
            create_handler: Arc::new(CreateMenuItemHandler::new(repo.clone())),
            delete_handler: Arc::new(DeleteMenuItemHandler::new(repo)),
        }
    }

    fn pizza() -> MenuItem {
        MenuItem {
            id: MenuItemId(1),
            name: "Pizza".to_string(),
            description: "Delicious pizza".to_string(),
            price: Decimal::new(1299, 2),
        }
    }

    #[tokio::test]
    async fn get_by_id_returns_item_json() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(Some(pizza())));

        let app = routes(state_with(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/menu/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Pizza");
        assert_eq!(json["description"], "Delicious pizza");
        assert_eq!(json["price"], 12.99);
    }

    #[tokio::test]
    async fn get_by_id_maps_absence_to_404_problem() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let app = routes(state_with(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/menu/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/problem+json"
        );
    }

    #[tokio::test]
    async fn delete_returns_no_content() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_delete().returning(|_| Ok(()));

        let app = routes(state_with(repo));
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/menu/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
