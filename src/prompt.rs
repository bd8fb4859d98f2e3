use crate::structs::quiz::QuizQuestion;

/// 生成试题的提示词，要求模型只返回JSON数组
pub fn quiz_prompt(topic: &str, count: usize) -> String {
    format!(
        r#"
Generate {count} multiple choice quiz questions on "{topic}".

Return ONLY valid JSON array.
No markdown. No explanation.

Format:
[
  {{
    "question": "string",
    "options": {{
      "A": "string",
      "B": "string",
      "C": "string",
      "D": "string"
    }},
    "correct_answer": "A"
  }}
]
"#
    )
}

pub fn explain_prompt(question: &QuizQuestion) -> String {
    let options = question
        .options
        .iter()
        .map(|(label, text)| format!("{label}. {text}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "
Explain the correct answer for the following multiple choice question.

Question:
{}

Options:
{}

Correct Answer: {}

Give a short, clear explanation (2-3 sentences).
",
        question.question, options, question.correct_answer
    )
}
