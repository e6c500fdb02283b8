//! PostgreSQL 配置模块

use std::time::Duration;

/// PostgreSQL 连接池配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// 数据库 URL
    pub url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 获取连接超时
    pub acquire_timeout: Duration,
    /// 空闲超时
    pub idle_timeout: Duration,
    /// 应用名称（用于连接标识）
    pub application_name: Option<String>,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            application_name: None,
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = PostgresConfig::new("postgres://localhost/bento")
            .with_max_connections(42)
            .with_application_name("menu-service");

        assert_eq!(config.max_connections, 42);
        assert_eq!(config.application_name.as_deref(), Some("menu-service"));
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }
}
