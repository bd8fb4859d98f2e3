use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 选项标签，序列化为单个字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
    #[serde(alias = "d")]
    D,
}

impl OptionLabel {
    pub const ALL: [OptionLabel; 4] = [OptionLabel::A, OptionLabel::B, OptionLabel::C, OptionLabel::D];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
            OptionLabel::D => "D",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLabel(pub String);

impl fmt::Display for InvalidLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "无效的选项标签: {}", self.0)
    }
}

impl std::error::Error for InvalidLabel {}

impl FromStr for OptionLabel {
    type Err = InvalidLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(OptionLabel::A),
            "B" => Ok(OptionLabel::B),
            "C" => Ok(OptionLabel::C),
            "D" => Ok(OptionLabel::D),
            _ => Err(InvalidLabel(s.to_string())),
        }
    }
}

/// 四个选项，缺少或多出任何一个标签都视为无效
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizOptions {
    #[serde(rename = "A", deserialize_with = "option_text")]
    pub a: String,
    #[serde(rename = "B", deserialize_with = "option_text")]
    pub b: String,
    #[serde(rename = "C", deserialize_with = "option_text")]
    pub c: String,
    #[serde(rename = "D", deserialize_with = "option_text")]
    pub d: String,
}

// 模型有时把数字或布尔值直接作为选项，统一转成文本
fn option_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!("选项必须是文本、数字或布尔值: {other}"))),
    }
}

impl QuizOptions {
    pub fn get(&self, label: OptionLabel) -> &str {
        match label {
            OptionLabel::A => &self.a,
            OptionLabel::B => &self.b,
            OptionLabel::C => &self.c,
            OptionLabel::D => &self.d,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL.into_iter().map(move |label| (label, self.get(label)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: QuizOptions,
    pub correct_answer: OptionLabel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_parsing() {
        assert_eq!("b".parse::<OptionLabel>(), Ok(OptionLabel::B));
        assert_eq!(" D ".parse::<OptionLabel>(), Ok(OptionLabel::D));
        assert!("E".parse::<OptionLabel>().is_err());
        assert!("".parse::<OptionLabel>().is_err());
    }

    #[test]
    fn question_serializes_with_letter_keys() {
        let question = QuizQuestion {
            question: "2 + 2?".to_string(),
            options: QuizOptions {
                a: "3".to_string(),
                b: "4".to_string(),
                c: "5".to_string(),
                d: "22".to_string(),
            },
            correct_answer: OptionLabel::B,
        };
        assert_eq!(
            serde_json::to_value(&question).unwrap(),
            json!({
                "question": "2 + 2?",
                "options": {"A": "3", "B": "4", "C": "5", "D": "22"},
                "correct_answer": "B"
            })
        );
    }

    #[test]
    fn options_must_be_exactly_a_to_d() {
        let five = json!({"A": "1", "B": "2", "C": "3", "D": "4", "E": "5"});
        assert!(serde_json::from_value::<QuizOptions>(five).is_err());

        let three = json!({"A": "1", "B": "2", "C": "3"});
        assert!(serde_json::from_value::<QuizOptions>(three).is_err());
    }

    #[test]
    fn scalar_options_become_text() {
        let options: QuizOptions =
            serde_json::from_value(json!({"A": 3, "B": 4.5, "C": true, "D": "22"})).unwrap();
        assert_eq!(options.get(OptionLabel::A), "3");
        assert_eq!(options.get(OptionLabel::B), "4.5");
        assert_eq!(options.get(OptionLabel::C), "true");
        assert_eq!(options.get(OptionLabel::D), "22");
    }

    #[test]
    fn nested_or_null_options_are_rejected() {
        let nested = json!({"A": [1], "B": "2", "C": "3", "D": "4"});
        assert!(serde_json::from_value::<QuizOptions>(nested).is_err());

        let null = json!({"A": null, "B": "2", "C": "3", "D": "4"});
        assert!(serde_json::from_value::<QuizOptions>(null).is_err());

        let object = json!({"A": {"text": "1"}, "B": "2", "C": "3", "D": "4"});
        assert!(serde_json::from_value::<QuizOptions>(object).is_err());
    }

    #[test]
    fn options_iterate_in_label_order() {
        let options: QuizOptions =
            serde_json::from_value(json!({"D": "d", "C": "c", "B": "b", "A": "a"})).unwrap();
        let labels: Vec<_> = options.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, OptionLabel::ALL.to_vec());
        assert_eq!(options.get(OptionLabel::C), "c");
    }
}
