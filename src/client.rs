use std::time::Duration;

use reqwest::Client;

use crate::config::Config;
use crate::error::Result;
use crate::structs::quiz::QuizQuestion;
use crate::structs::request::GenerateQuizRequest;
use crate::structs::respond::{ExplainResponse, GenerateQuizResponse, SettingsResponse};

/// 获取解析失败时显示的文本
pub const EXPLANATION_UNAVAILABLE: &str = "Explanation unavailable.";

/// 出题服务的HTTP客户端
#[derive(Debug, Clone)]
pub struct QuizClient {
    client: Client,
    base_url: String,
}

impl QuizClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 按配置中的服务地址和超时创建
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.server_url(), config.client_timeout())
    }

    pub async fn settings(&self) -> Result<SettingsResponse> {
        let res = self
            .client
            .get(format!("{}/api/settings", self.base_url))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    /// 请求一套新试题，失败时返回空列表
    pub async fn generate(&self, topic: &str, count: usize) -> Vec<QuizQuestion> {
        match self.try_generate(topic, count).await {
            Ok(quiz) => quiz,
            Err(e) => {
                log::error!("请求试题失败: {e}");
                Vec::new()
            }
        }
    }

    async fn try_generate(&self, topic: &str, count: usize) -> Result<Vec<QuizQuestion>> {
        let body = GenerateQuizRequest {
            topic: Some(topic.to_string()),
            count: Some(count),
        };
        let res = self
            .client
            .post(format!("{}/api/generate-quiz", self.base_url))
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let data: GenerateQuizResponse = res.json().await?;
        Ok(data.quiz)
    }

    /// 获取一道题的解析，失败时只影响这一道题
    pub async fn explain(&self, question: &QuizQuestion) -> String {
        match self.try_explain(question).await {
            Ok(explanation) => explanation,
            Err(e) => {
                log::warn!("获取解析失败: {e}");
                EXPLANATION_UNAVAILABLE.to_string()
            }
        }
    }

    async fn try_explain(&self, question: &QuizQuestion) -> Result<String> {
        let res = self
            .client
            .post(format!("{}/api/explain", self.base_url))
            .json(question)
            .send()
            .await?
            .error_for_status()?;
        let data: ExplainResponse = res.json().await?;
        Ok(data.explanation)
    }

    /// 按题目顺序依次获取解析，结果下标与题目序号一一对应
    pub async fn explain_all(&self, quiz: &[QuizQuestion]) -> Vec<String> {
        let mut explanations = Vec::with_capacity(quiz.len());
        for question in quiz {
            explanations.push(self.explain(question).await);
        }
        explanations
    }
}
