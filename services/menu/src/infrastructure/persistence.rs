//! PostgreSQL 菜单项 Repository 实现

use async_trait::async_trait;
use bento_common::MenuItemId;
use bento_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::{MenuItem, NewMenuItem};
use crate::domain::repositories::MenuItemRepository;

pub struct PostgresMenuItemRepository {
    pool: PgPool,
}

impl PostgresMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
}

impl MenuItemRow {
    fn into_menu_item(self) -> MenuItem {
        MenuItem {
            id: MenuItemId(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[async_trait]
impl MenuItemRepository for PostgresMenuItemRepository {
    async fn find_all(&self) -> AppResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, name, description, price
            FROM menu_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list menu items: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_menu_item()).collect())
    }

    async fn find_by_id(&self, id: MenuItemId) -> AppResult<Option<MenuItem>> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"
            SELECT id, name, description, price
            FROM menu_items
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find menu item: {}", e)))?;

        Ok(row.map(|r| r.into_menu_item()))
    }

    async fn save(&self, item: &NewMenuItem) -> AppResult<MenuItem> {
        let row = sqlx::query_as::<_, MenuItemRow>(
            r#"
            INSERT INTO menu_items (name, description, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, price
            "#,
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save menu item: {}", e)))?;

        Ok(row.into_menu_item())
    }

    async fn delete(&self, id: MenuItemId) -> AppResult<()> {
        sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete menu item: {}", e)))?;

        Ok(())
    }
}
