use serde_json::Value;

use crate::structs::quiz::QuizQuestion;

/// 去掉模型常带的markdown代码块标记
pub fn strip_code_fences(content: &str) -> &str {
    let trimmed = content.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    trimmed.strip_suffix("```").unwrap_or(trimmed).trim()
}

/// 将模型输出解析为试题列表
///
/// 任何无法解析的内容都得到空列表，单个格式不正确的题目会被丢弃，
/// 多出来的题目按请求数量截断。
pub fn parse_quiz(content: &str, count: usize) -> Vec<QuizQuestion> {
    let value: Value = match serde_json::from_str(strip_code_fences(content)) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("模型返回的内容不是合法JSON: {e}");
            return Vec::new();
        }
    };

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("quiz").or_else(|| map.remove("questions")) {
            Some(Value::Array(entries)) => entries,
            _ => {
                log::warn!("模型返回的JSON对象中没有试题数组");
                return Vec::new();
            }
        },
        _ => {
            log::warn!("模型返回的JSON不是数组");
            return Vec::new();
        }
    };

    let mut quiz: Vec<QuizQuestion> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value(entry) {
            Ok(question) => Some(question),
            Err(e) => {
                log::warn!("丢弃第{}道格式错误的题目: {e}", i + 1);
                None
            }
        })
        .collect();
    quiz.truncate(count);
    quiz
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::quiz::OptionLabel;

    const TWO_QUESTIONS: &str = r#"[
        {"question": "Q1", "options": {"A": "a", "B": "b", "C": "c", "D": "d"}, "correct_answer": "A"},
        {"question": "Q2", "options": {"A": "a", "B": "b", "C": "c", "D": "d"}, "correct_answer": "C"}
    ]"#;

    #[test]
    fn strips_fences() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n[1]\n```\n"), "[1]");
        assert_eq!(strip_code_fences("  [1] "), "[1]");
    }

    #[test]
    fn parses_plain_array() {
        let quiz = parse_quiz(TWO_QUESTIONS, 2);
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[1].question, "Q2");
        assert_eq!(quiz[1].correct_answer, OptionLabel::C);
    }

    #[test]
    fn parses_fenced_array() {
        let fenced = format!("```json\n{TWO_QUESTIONS}\n```");
        assert_eq!(parse_quiz(&fenced, 5).len(), 2);
    }

    #[test]
    fn accepts_wrapped_array() {
        let wrapped = format!(r#"{{"quiz": {TWO_QUESTIONS}}}"#);
        assert_eq!(parse_quiz(&wrapped, 2).len(), 2);
        let wrapped = format!(r#"{{"questions": {TWO_QUESTIONS}}}"#);
        assert_eq!(parse_quiz(&wrapped, 2).len(), 2);
    }

    #[test]
    fn malformed_output_is_empty() {
        assert!(parse_quiz("Sure! Here are your questions:", 3).is_empty());
        assert!(parse_quiz("[{\"question\": ", 3).is_empty());
        assert!(parse_quiz("\"just a string\"", 3).is_empty());
        assert!(parse_quiz("{\"answer\": 42}", 3).is_empty());
        assert!(parse_quiz("", 3).is_empty());
    }

    #[test]
    fn drops_only_bad_entries() {
        let content = r#"[
            {"question": "ok", "options": {"A": "a", "B": "b", "C": "c", "D": "d"}, "correct_answer": "D"},
            {"question": "three options", "options": {"A": "a", "B": "b", "C": "c"}, "correct_answer": "A"},
            {"question": "bad label", "options": {"A": "a", "B": "b", "C": "c", "D": "d"}, "correct_answer": "E"},
            {"options": {"A": "a", "B": "b", "C": "c", "D": "d"}, "correct_answer": "A"}
        ]"#;
        let quiz = parse_quiz(content, 4);
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].question, "ok");
    }

    #[test]
    fn keeps_questions_with_numeric_options() {
        let content = r#"[
            {"question": "2 + 2?", "options": {"A": 3, "B": 4, "C": 5, "D": 22}, "correct_answer": "B"},
            {"question": "Q2", "options": {"A": "a", "B": "b", "C": "c", "D": "d"}, "correct_answer": "C"}
        ]"#;
        let quiz = parse_quiz(content, 2);
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].options.get(OptionLabel::B), "4");
        assert_eq!(quiz[0].options.get(OptionLabel::D), "22");
    }

    #[test]
    fn truncates_to_requested_count() {
        assert_eq!(parse_quiz(TWO_QUESTIONS, 1).len(), 1);
    }
}
