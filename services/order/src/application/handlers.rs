//! 订单创建工作流
//!
//! 核心流程：逐行解析菜单单价（串行远程调用）→ 累加总价 → 持久化。
//! 任一行查价失败或持久化失败都使整个创建失败，不落部分订单。

use std::sync::Arc;

use async_trait::async_trait;
use bento_cqrs_core::CommandHandler;
use bento_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::info;

use crate::application::commands::CreateOrderCommand;
use crate::domain::entities::{NewOrder, Order, OrderItem};
use crate::domain::menu_lookup::MenuLookup;
use crate::domain::repositories::OrderRepository;

/// 创建订单处理器
pub struct CreateOrderHandler {
    order_repo: Arc<dyn OrderRepository>,
    menu_lookup: Arc<dyn MenuLookup>,
}

impl CreateOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepository>, menu_lookup: Arc<dyn MenuLookup>) -> Self {
        Self {
            order_repo,
            menu_lookup,
        }
    }
}

#[async_trait]
impl CommandHandler<CreateOrderCommand> for CreateOrderHandler {
    async fn handle(&self, command: CreateOrderCommand) -> AppResult<Order> {
        // 数量在任何远程调用之前校验
        if let Some(line) = command.lines.iter().find(|l| l.quantity <= 0) {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got {} for menu item {}",
                line.quantity, line.menu_item_id
            )));
        }

        // 每行一次查价，串行等待；总价按创建时可见的价格快照累加
        let mut total_price = Decimal::ZERO;
        let mut items = Vec::with_capacity(command.lines.len());
        for line in &command.lines {
            let menu_item = self.menu_lookup.menu_item_by_id(line.menu_item_id).await?;
            total_price += menu_item.price * Decimal::from(line.quantity);
            items.push(OrderItem {
                menu_item_id: line.menu_item_id,
                quantity: line.quantity,
            });
        }

        let order = self
            .order_repo
            .save(&NewOrder {
                user_id: command.user_id,
                items,
                total_price,
            })
            .await?;

        info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total_price = %order.total_price,
            "Order created"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bento_common::{MenuItemId, OrderId, UserId};
    use mockall::predicate::eq;

    use crate::application::commands::OrderLine;
    use crate::domain::menu_lookup::{MenuItemView, MockMenuLookup};
    use crate::domain::repositories::MockOrderRepository;

    fn menu_item(id: i64, price: Decimal) -> MenuItemView {
        MenuItemView {
            id: MenuItemId(id),
            name: format!("item-{}", id),
            description: String::new(),
            price,
        }
    }

    fn saved(order: &NewOrder) -> Order {
        Order {
            id: OrderId(1),
            user_id: order.user_id,
            items: order.items.clone(),
            total_price: order.total_price,
        }
    }

    #[tokio::test]
    async fn total_equals_price_for_single_line() {
        let mut lookup = MockMenuLookup::new();
        lookup
            .expect_menu_item_by_id()
            .with(eq(MenuItemId(1)))
            .times(1)
            .returning(|_| Ok(menu_item(1, Decimal::new(1299, 2))));

        let mut repo = MockOrderRepository::new();
        repo.expect_save().times(1).returning(|order| Ok(saved(order)));

        let handler = CreateOrderHandler::new(Arc::new(repo), Arc::new(lookup));
        let order = handler
            .handle(CreateOrderCommand {
                user_id: UserId(1),
                lines: vec![OrderLine {
                    menu_item_id: MenuItemId(1),
                    quantity: 1,
                }],
            })
            .await
            .unwrap();

        assert_eq!(order.total_price, Decimal::new(1299, 2));
        assert_eq!(order.items.len(), 1);
    }

    // 12.99 × 1 + 5.00 × 2 = 22.99
    #[tokio::test]
    async fn total_sums_price_times_quantity_across_lines() {
        let mut lookup = MockMenuLookup::new();
        lookup
            .expect_menu_item_by_id()
            .with(eq(MenuItemId(1)))
            .times(1)
            .returning(|_| Ok(menu_item(1, Decimal::new(1299, 2))));
        lookup
            .expect_menu_item_by_id()
            .with(eq(MenuItemId(2)))
            .times(1)
            .returning(|_| Ok(menu_item(2, Decimal::new(500, 2))));

        let mut repo = MockOrderRepository::new();
        repo.expect_save().times(1).returning(|order| Ok(saved(order)));

        let handler = CreateOrderHandler::new(Arc::new(repo), Arc::new(lookup));
        let order = handler
            .handle(CreateOrderCommand {
                user_id: UserId(1),
                lines: vec![
                    OrderLine {
                        menu_item_id: MenuItemId(1),
                        quantity: 1,
                    },
                    OrderLine {
                        menu_item_id: MenuItemId(2),
                        quantity: 2,
                    },
                ],
            })
            .await
            .unwrap();

        assert_eq!(order.total_price, Decimal::new(2299, 2));
    }

    #[tokio::test]
    async fn unknown_menu_item_aborts_without_persisting() {
        let mut lookup = MockMenuLookup::new();
        lookup
            .expect_menu_item_by_id()
            .with(eq(MenuItemId(1)))
            .times(1)
            .returning(|_| Ok(menu_item(1, Decimal::new(1299, 2))));
        lookup
            .expect_menu_item_by_id()
            .with(eq(MenuItemId(99)))
            .times(1)
            .returning(|_| Err(AppError::not_found("Menu item 99 not found")));

        let mut repo = MockOrderRepository::new();
        repo.expect_save().times(0);

        let handler = CreateOrderHandler::new(Arc::new(repo), Arc::new(lookup));
        let result = handler
            .handle(CreateOrderCommand {
                user_id: UserId(1),
                lines: vec![
                    OrderLine {
                        menu_item_id: MenuItemId(1),
                        quantity: 1,
                    },
                    OrderLine {
                        menu_item_id: MenuItemId(99),
                        quantity: 1,
                    },
                ],
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_positive_quantity_rejected_before_any_lookup() {
        let mut lookup = MockMenuLookup::new();
        lookup.expect_menu_item_by_id().times(0);

        let mut repo = MockOrderRepository::new();
        repo.expect_save().times(0);

        let handler = CreateOrderHandler::new(Arc::new(repo), Arc::new(lookup));
        let result = handler
            .handle(CreateOrderCommand {
                user_id: UserId(1),
                lines: vec![OrderLine {
                    menu_item_id: MenuItemId(1),
                    quantity: 0,
                }],
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    // 空订单允许：总价为零，正常落库
    #[tokio::test]
    async fn empty_order_persists_with_zero_total() {
        let lookup = MockMenuLookup::new();

        let mut repo = MockOrderRepository::new();
        repo.expect_save()
            .withf(|order: &NewOrder| order.items.is_empty() && order.total_price == Decimal::ZERO)
            .times(1)
            .returning(|order| Ok(saved(order)));

        let handler = CreateOrderHandler::new(Arc::new(repo), Arc::new(lookup));
        let order = handler
            .handle(CreateOrderCommand {
                user_id: UserId(1),
                lines: vec![],
            })
            .await
            .unwrap();

        assert_eq!(order.total_price, Decimal::ZERO);
    }

    #[tokio::test]
    async fn persistence_failure_propagates() {
        let mut lookup = MockMenuLookup::new();
        lookup
            .expect_menu_item_by_id()
            .returning(|_| Ok(menu_item(1, Decimal::new(1299, 2))));

        let mut repo = MockOrderRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(AppError::database("insert failed")));

        let handler = CreateOrderHandler::new(Arc::new(repo), Arc::new(lookup));
        let result = handler
            .handle(CreateOrderCommand {
                user_id: UserId(1),
                lines: vec![OrderLine {
                    menu_item_id: MenuItemId(1),
                    quantity: 1,
                }],
            })
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
