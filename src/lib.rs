//! AI 出题服务：调用大模型生成选择题、给出答案解析，并提供答题页面

pub mod client;
pub mod config;
pub mod error;
pub mod llm_client;
pub mod parser;
pub mod prompt;
pub mod scoring;
pub(crate) mod service;
pub mod session;
pub mod structs;
pub mod webserver;

pub use service::quiz::{EXPLANATION_FAILED, EXPLANATION_NOT_AVAILABLE};
