//! 日志基础设施

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

pub struct Logger;

impl Logger {
    /// 读取 `RUST_LOG`，未设置时使用 `info`
    pub fn init() {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
