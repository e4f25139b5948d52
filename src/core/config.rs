//! 运行配置，从环境变量加载

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 配置错误类型
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable '{0}' is required but not set")]
    MissingEnvVar(String),

    #[error("Failed to parse environment variable '{key}': {details}")]
    Parse { key: String, details: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意查找函数构建配置，测试时不必修改进程环境
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Parse {
                key: "PORT".to_string(),
                details: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("API_KEY".to_string()))?;

        Ok(Self {
            host,
            port,
            api_key,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn falls_back_to_default_host_and_port() {
        let config = AppConfig::from_lookup(lookup(&[("API_KEY", "k")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.api_key, "k");
    }

    #[test]
    fn reads_port_override() {
        let config =
            AppConfig::from_lookup(lookup(&[("API_KEY", "k"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = AppConfig::from_lookup(lookup(&[("API_KEY", "k"), ("PORT", "abc")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref key, .. } if key == "PORT"));
    }

    #[test]
    fn requires_api_key() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "API_KEY"));

        let err = AppConfig::from_lookup(lookup(&[("API_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnvVar(_)));
    }
}
