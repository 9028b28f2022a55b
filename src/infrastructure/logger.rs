//! 日志基础设施

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// `RUST_LOG` 优先，未设置时使用配置中的日志级别
    pub fn init(config: &LoggingConfig) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("webshop={0},tower_http={0}", config.level)));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
