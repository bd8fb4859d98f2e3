use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::error::Result;
use crate::llm_client::LlmClient;
use crate::parser::parse_quiz;
use crate::prompt::{explain_prompt, quiz_prompt};
use crate::structs::quiz::QuizQuestion;
use crate::structs::request::{ExplainRequest, GenerateQuizRequest};
use crate::structs::respond::{ExplainResponse, GenerateQuizResponse, SettingsResponse};

/// 上游应答中没有解析内容时的占位文本
pub const EXPLANATION_NOT_AVAILABLE: &str = "Explanation not available.";
/// 请求本身失败时的占位文本
pub const EXPLANATION_FAILED: &str = "Failed to generate explanation.";

// 生成试题，任何错误都返回空列表
pub(crate) async fn generate_quiz(
    body: web::Bytes,
    llm: web::Data<LlmClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let quiz = match request_quiz(&body, &llm, &config).await {
        Ok(quiz) => quiz,
        Err(e) => {
            log::error!("生成试题失败: {e}");
            Vec::new()
        }
    };
    HttpResponse::Ok().json(GenerateQuizResponse { quiz })
}

async fn request_quiz(body: &[u8], llm: &LlmClient, config: &Config) -> Result<Vec<QuizQuestion>> {
    let req: GenerateQuizRequest = serde_json::from_slice(body)?;
    let topic = req
        .topic
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| config.quiz.default_topic.clone());
    let count = req
        .count
        .unwrap_or(config.quiz.default_count)
        .clamp(1, config.quiz.max_count.max(1));

    log::info!("正在生成{count}道关于\"{topic}\"的试题");
    let content = llm.chat(&quiz_prompt(&topic, count), config.llm.quiz_temperature).await?;
    let quiz = parse_quiz(&content, count);
    if quiz.len() < count {
        log::warn!("模型只返回了{}/{count}道有效试题", quiz.len());
    }
    Ok(quiz)
}

// 获取某道题的答案解析
pub(crate) async fn explain(
    body: web::Bytes,
    llm: web::Data<LlmClient>,
    config: web::Data<Config>,
) -> HttpResponse {
    let explanation = match request_explanation(&body, &llm, &config).await {
        Ok(text) => text.trim().to_string(),
        Err(e) if e.is_empty_reply() => {
            log::warn!("模型没有给出解析: {e}");
            EXPLANATION_NOT_AVAILABLE.to_string()
        }
        Err(e) => {
            log::error!("获取解析失败: {e}");
            EXPLANATION_FAILED.to_string()
        }
    };
    HttpResponse::Ok().json(ExplainResponse { explanation })
}

async fn request_explanation(body: &[u8], llm: &LlmClient, config: &Config) -> Result<String> {
    let question: ExplainRequest = serde_json::from_slice(body)?;
    llm.chat(&explain_prompt(&question), config.llm.explain_temperature).await
}

pub(crate) async fn settings(config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok().json(SettingsResponse {
        seconds_per_question: config.quiz.seconds_per_question,
        max_count: config.quiz.max_count,
        default_topic: config.quiz.default_topic.clone(),
        default_count: config.quiz.default_count,
    })
}
