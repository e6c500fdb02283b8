//! 重试工具模块
//!
//! 启动期基础设施连接的指数退避重试

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

/// 重试配置
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// 最大重试次数
    pub max_attempts: u32,
    /// 初始延迟（毫秒）
    pub initial_delay_ms: u64,
    /// 最大延迟（毫秒）
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 1000,
            max_delay_ms: 30000,
        }
    }
}

impl RetryConfig {
    pub fn new(max_attempts: u32, initial_delay_ms: u64, max_delay_ms: u64) -> Self {
        Self {
            max_attempts,
            initial_delay_ms,
            max_delay_ms,
        }
    }

    /// 第 n 次重试的延迟（2 的幂退避，封顶 max_delay_ms）
    fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let delay_ms = self.initial_delay_ms.saturating_mul(1u64 << attempt.min(16));
        Duration::from_millis(delay_ms.min(self.max_delay_ms))
    }
}

/// 带重试的异步操作执行器
///
/// 操作成功时返回 Ok(T)，所有重试都失败时返回最后一次的错误
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    // max_attempts == 0 仍执行一次，避免空循环后取 last_error
    let max_attempts = config.max_attempts.max(1);
    let mut last_error: Option<E> = None;

    for attempt in 0..max_attempts {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    info!(
                        operation = operation_name,
                        attempt = attempt + 1,
                        "Operation succeeded after retry"
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                if attempt + 1 >= max_attempts {
                    warn!(
                        operation = operation_name,
                        attempt = attempt + 1,
                        max_attempts = max_attempts,
                        error = %e,
                        "Operation failed, no more retries"
                    );
                } else {
                    let delay = config.delay_for_attempt(attempt);
                    warn!(
                        operation = operation_name,
                        attempt = attempt + 1,
                        max_attempts = max_attempts,
                        error = %e,
                        delay_ms = delay.as_millis(),
                        "Operation failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                last_error = Some(e);
            }
        }
    }

    Err(last_error.expect("at least one attempt should have been made"))
}
