use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// 默认配置文件路径，可通过 QUIZ_CONFIG 覆盖
pub const CONFIG_FILE: &str = "config.toml";

/// 客户端比服务端等待上游多留出的时间
const CLIENT_TIMEOUT_MARGIN_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 页面模板目录
    pub templates_dir: String,
    /// 静态资源目录
    pub resources_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub model: String,
    pub referer: String,
    pub title: String,
    pub timeout_secs: u64,
    pub quiz_temperature: f32,
    pub explain_temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub default_topic: String,
    pub default_count: usize,
    pub max_count: usize,
    pub seconds_per_question: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            templates_dir: "templates".to_string(),
            resources_dir: "resources".to_string(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://openrouter.ai/api/v1".to_string(),
            api_key: String::new(),
            model: "openai/gpt-4o-mini".to_string(),
            referer: "http://localhost:3000".to_string(),
            title: "AI Quiz Generator".to_string(),
            timeout_secs: 60,
            quiz_temperature: 0.0,
            explain_temperature: 0.3,
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_topic: "Java".to_string(),
            default_count: 3,
            max_count: 10,
            seconds_per_question: 30,
        }
    }
}

impl Config {
    /// 读取配置文件，文件不存在时使用默认值，之后应用环境变量
    pub fn load(path: &str) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_toml(&fs::read_to_string(path)?)?
        } else {
            log::info!("配置文件{path}不存在，使用默认配置");
            Self::default()
        };
        if let Ok(key) = std::env::var("OPENROUTER_API_KEY") {
            config.llm.api_key = key;
        }
        Ok(config)
    }

    /// 从 QUIZ_CONFIG 指定的路径读取配置
    pub fn from_env() -> Result<Self> {
        let path = std::env::var("QUIZ_CONFIG").unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::load(&path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// 客户端请求的超时，需覆盖服务端等待上游的时间
    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.timeout_secs.saturating_add(CLIENT_TIMEOUT_MARGIN_SECS))
    }

    /// 服务器对外地址，供客户端使用
    pub fn server_url(&self) -> String {
        std::env::var("QUIZ_SERVER_URL")
            .unwrap_or_else(|_| format!("http://{}:{}", self.server.host, self.server.port))
    }
}
