use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::structs::quiz::QuizQuestion;

// 生成试题的请求，缺省字段由配置补全
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GenerateQuizRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub count: Option<usize>,
}

// 解释答案的请求与试题本身字段一致
pub type ExplainRequest = QuizQuestion;

// 页面上的数字输入框会以字符串提交数量
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .map(|n| n as usize),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
