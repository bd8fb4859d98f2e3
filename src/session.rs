use std::collections::HashMap;

use crate::scoring::{mark, Answers};
use crate::structs::quiz::{OptionLabel, QuizQuestion};

/// 计时器每走一秒的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// 计时器未运行
    Idle,
    /// 剩余秒数
    Running(u64),
    /// 时间到，已自动交卷，附带得分
    Expired(usize),
}

/// 一次答题的全部状态：试题、作答、倒计时、得分和解析
///
/// 生成新试题时应整体替换为新的会话，旧的作答、得分和解析随之丢弃。
#[derive(Debug, Default)]
pub struct QuizSession {
    quiz: Vec<QuizQuestion>,
    answers: Answers,
    score: Option<usize>,
    explanations: HashMap<usize, String>,
    time_left: u64,
    timer_running: bool,
    timed_out: bool,
}

impl QuizSession {
    pub fn new(quiz: Vec<QuizQuestion>, seconds_per_question: u64) -> Self {
        let time_left = (quiz.len() as u64).saturating_mul(seconds_per_question);
        Self {
            timer_running: time_left > 0,
            time_left,
            quiz,
            ..Self::default()
        }
    }

    pub fn quiz(&self) -> &[QuizQuestion] {
        &self.quiz
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn score(&self) -> Option<usize> {
        self.score
    }

    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.timer_running
    }

    pub fn is_submitted(&self) -> bool {
        self.score.is_some()
    }

    /// 是否因时间耗尽而自动交卷
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// 记录作答，交卷后或序号越界时返回false
    pub fn select(&mut self, index: usize, label: OptionLabel) -> bool {
        if self.is_submitted() || index >= self.quiz.len() {
            return false;
        }
        self.answers.insert(index, label);
        true
    }

    pub fn tick(&mut self) -> Tick {
        if !self.timer_running {
            return Tick::Idle;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return Tick::Running(self.time_left);
        }
        self.timed_out = true;
        match self.submit() {
            Some(score) => Tick::Expired(score),
            None => Tick::Idle,
        }
    }

    /// 交卷并评分，只有第一次调用会返回分数
    pub fn submit(&mut self) -> Option<usize> {
        if self.is_submitted() || self.quiz.is_empty() {
            return None;
        }
        self.timer_running = false;
        let score = mark(&self.quiz, &self.answers);
        self.score = Some(score);
        Some(score)
    }

    /// 解析只在交卷后记录
    pub fn set_explanation(&mut self, index: usize, text: impl Into<String>) -> bool {
        if !self.is_submitted() || index >= self.quiz.len() {
            return false;
        }
        self.explanations.insert(index, text.into());
        true
    }

    pub fn explanation(&self, index: usize) -> Option<&str> {
        self.explanations.get(&index).map(String::as_str)
    }
}

/// 将秒数格式化为 m:ss
pub fn format_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
