//! 订单 HTTP 路由
//!
//! GET  /api/orders               全部订单
//! GET  /api/orders/{id}          单个订单（缺失返回 404）
//! GET  /api/orders/user/{userId} 某用户的订单
//! POST /api/orders               创建订单（含派生总价）
//!
//! JSON 字段为 camelCase。

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use bento_common::{MenuItemId, OrderId, UserId};
use bento_cqrs_core::CommandHandler;
use bento_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::commands::{CreateOrderCommand, OrderLine};
use crate::application::handlers::CreateOrderHandler;
use crate::domain::entities::Order;
use crate::domain::repositories::OrderRepository;

#[derive(Clone)]
pub struct AppState {
    pub order_repo: Arc<dyn OrderRepository>,
    pub create_handler: Arc<CreateOrderHandler>,
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/orders", get(list_orders).post(create_order))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/user/{user_id}", get(get_orders_by_user))
        .with_state(state)
}

/// 创建订单请求体：`{ userId, orderItems: [{ menuItem: { id }, quantity }] }`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub user_id: UserId,
    pub order_items: Vec<OrderItemRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub menu_item: MenuItemRef,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct MenuItemRef {
    pub id: MenuItemId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub user_id: UserId,
    pub order_items: Vec<OrderItemResponse>,
    pub total_price: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id,
            order_items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    menu_item_id: item.menu_item_id,
                    quantity: item.quantity,
                })
                .collect(),
            total_price: order.total_price,
        }
    }
}

async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = state.order_repo.find_all().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderResponse>> {
    let order = state
        .order_repo
        .find_by_id(OrderId(id))
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    Ok(Json(order.into()))
}

async fn get_orders_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = state.order_repo.find_by_user_id(UserId(user_id)).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<OrderRequest>,
) -> AppResult<(StatusCode, Json<OrderResponse>)> {
    let order = state
        .create_handler
        .handle(CreateOrderCommand {
            user_id: request.user_id,
            lines: request
                .order_items
                .into_iter()
                .map(|item| OrderLine {
                    menu_item_id: item.menu_item.id,
                    quantity: item.quantity,
                })
                .collect(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(order.into())))
}
