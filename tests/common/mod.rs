#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use quizgen::config::Config;

/// 上游收到的请求：Authorization 头和请求体
pub type Recorded = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// 在随机端口上启动一个假的 chat-completions 服务
pub fn spawn_upstream(status: StatusCode, body: String) -> (String, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let seen = recorded.clone();
    let server = HttpServer::new(move || {
        let seen = seen.clone();
        let body = body.clone();
        App::new().route(
            "/chat/completions",
            web::post().to(move |req: HttpRequest, payload: web::Json<Value>| {
                let seen = seen.clone();
                let body = body.clone();
                async move {
                    let auth = req
                        .headers()
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    seen.lock().unwrap().push((auth, payload.into_inner()));
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(body)
                }
            }),
        )
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    (format!("http://{addr}"), recorded)
}

/// 返回给定文本作为第一个候选回复
pub fn reply(content: &str) -> String {
    json!({
        "id": "gen-1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

pub fn quiz_content(count: usize) -> String {
    let questions: Vec<Value> = (0..count)
        .map(|i| {
            let label = ["A", "B", "C", "D"][i % 4];
            json!({
                "question": format!("Question {i}?"),
                "options": {"A": "alpha", "B": "beta", "C": "gamma", "D": "delta"},
                "correct_answer": label
            })
        })
        .collect();
    format!("```json\n{}\n```", serde_json::to_string_pretty(&questions).unwrap())
}

pub fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.llm.api_base_url = base_url.to_string();
    config.llm.api_key = "test-key".to_string();
    config.llm.timeout_secs = 5;
    config
}

// 没有服务监听的地址
pub const UNREACHABLE: &str = "http://127.0.0.1:1";
