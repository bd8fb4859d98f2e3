use std::collections::HashMap;

use crate::structs::quiz::{OptionLabel, QuizQuestion};

/// 题目序号到所选标签的映射
pub type Answers = HashMap<usize, OptionLabel>;

// 进行评分，每答对一题得一分，未作答或越界的序号不计分
pub fn mark(quiz: &[QuizQuestion], answers: &Answers) -> usize {
    quiz.iter()
        .enumerate()
        .filter(|(i, question)| answers.get(i) == Some(&question.correct_answer))
        .count()
}
