//! PostgreSQL 订单 Repository 实现
//!
//! orders 与 order_items 两张表，写入在同一事务内完成。

use async_trait::async_trait;
use bento_common::{MenuItemId, OrderId, UserId};
use bento_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::{NewOrder, Order, OrderItem};
use crate::domain::repositories::OrderRepository;

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, order_id: i64) -> AppResult<Vec<OrderItem>> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT menu_item_id, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to load order items: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_order_item()).collect())
    }

    async fn hydrate(&self, rows: Vec<OrderRow>) -> AppResult<Vec<Order>> {
        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let items = self.load_items(row.id).await?;
            orders.push(row.into_order(items));
        }
        Ok(orders)
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    total_price: Decimal,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Order {
        Order {
            id: OrderId(self.id),
            user_id: UserId(self.user_id),
            items,
            total_price: self.total_price,
        }
    }
}

#[derive(sqlx::FromRow)]
struct OrderItemRow {
    menu_item_id: i64,
    quantity: i32,
}

impl OrderItemRow {
    fn into_order_item(self) -> OrderItem {
        OrderItem {
            menu_item_id: MenuItemId(self.menu_item_id),
            quantity: self.quantity,
        }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, total_price
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list orders: {}", e)))?;

        self.hydrate(rows).await
    }

    async fn find_by_id(&self, id: OrderId) -> AppResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, total_price
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find order: {}", e)))?;

        match row {
            Some(row) => {
                let items = self.load_items(row.id).await?;
                Ok(Some(row.into_order(items)))
            }
            None => Ok(None),
        }
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, user_id, total_price
            FROM orders
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list orders by user: {}", e)))?;

        self.hydrate(rows).await
    }

    async fn save(&self, order: &NewOrder) -> AppResult<Order> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {}", e)))?;

        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (user_id, total_price)
            VALUES ($1, $2)
            RETURNING id, user_id, total_price
            "#,
        )
        .bind(order.user_id.0)
        .bind(order.total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to save order: {}", e)))?;

        for item in &order.items {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, menu_item_id, quantity)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(row.id)
            .bind(item.menu_item_id.0)
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to save order item: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit order: {}", e)))?;

        Ok(Order {
            id: OrderId(row.id),
            user_id: order.user_id,
            items: order.items.clone(),
            total_price: order.total_price,
        })
    }
}
