use serde::{Deserialize, Serialize};

use crate::structs::quiz::QuizQuestion;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateQuizResponse {
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

// 页面和客户端共用的计时规则
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub seconds_per_question: u64,
    pub max_count: usize,
    pub default_topic: String,
    pub default_count: usize,
}
