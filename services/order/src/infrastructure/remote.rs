//! 菜单服务 HTTP 客户端
//!
//! 对菜单服务公开的 GET /api/menu/{id} 发起单次同步调用，
//! 无重试、无本地缓存，超时取客户端级配置。

use std::time::Duration;

use async_trait::async_trait;
use bento_common::MenuItemId;
use bento_errors::{AppError, AppResult};
use reqwest::StatusCode;
use tracing::debug;

use crate::domain::menu_lookup::{MenuItemView, MenuLookup};

pub struct HttpMenuClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpMenuClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl MenuLookup for HttpMenuClient {
    async fn menu_item_by_id(&self, id: MenuItemId) -> AppResult<MenuItemView> {
        let url = format!("{}/api/menu/{}", self.base_url, id);

        debug!(%url, "Fetching menu item");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service(format!("Menu service call failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found(format!("Menu item {} not found", id)));
        }

        if !response.status().is_success() {
            return Err(AppError::external_service(format!(
                "Menu service returned {}",
                response.status()
            )));
        }

        response.json::<MenuItemView>().await.map_err(|e| {
            AppError::external_service(format!("Invalid menu service response: {}", e))
        })
    }
}
