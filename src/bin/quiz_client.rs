use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{self, Duration, MissedTickBehavior};

use quizgen::client::QuizClient;
use quizgen::config::Config;
use quizgen::error::Result;
use quizgen::session::{format_time, QuizSession, Tick};
use quizgen::structs::quiz::OptionLabel;

type Input = Lines<BufReader<Stdin>>;

async fn ask(input: &mut Input, prompt: &str) -> Result<String> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.unwrap_or_default().trim().to_string())
}

fn print_quiz(session: &QuizSession) {
    for (i, question) in session.quiz().iter().enumerate() {
        println!("\n{}. {}", i + 1, question.question);
        for (label, text) in question.options.iter() {
            println!("   {label}. {text}");
        }
    }
    println!("\n输入 \"<题号> <选项>\" 作答（例如 1 B），输入 submit 交卷");
}

// 解析 "<题号> <选项>" 形式的输入
fn parse_answer(line: &str) -> Option<(usize, OptionLabel)> {
    let mut parts = line.split_whitespace();
    let number: usize = parts.next()?.parse().ok()?;
    let label: OptionLabel = parts.next()?.parse().ok()?;
    if parts.next().is_some() || number == 0 {
        return None;
    }
    Some((number - 1, label))
}

async fn run_timer(session: &mut QuizSession, input: &mut Input) -> Result<()> {
    let mut ticker = time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // 第一次tick立即完成
    ticker.tick().await;
    println!("⏱ 剩余时间: {}", format_time(session.time_left()));

    while !session.is_submitted() {
        tokio::select! {
            _ = ticker.tick() => match session.tick() {
                Tick::Running(left) if left <= 10 || left % 30 == 0 => {
                    println!("⏱ 剩余时间: {}", format_time(left));
                }
                Tick::Expired(_) => println!("⏰ 时间到，已自动交卷"),
                _ => {}
            },
            line = input.next_line() => {
                let Some(line) = line? else {
                    // 输入结束时直接交卷
                    session.submit();
                    break;
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("submit") {
                    session.submit();
                } else if let Some((index, label)) = parse_answer(line) {
                    if !session.select(index, label) {
                        println!("没有第{}题", index + 1);
                    }
                } else if !line.is_empty() {
                    println!("无法识别的输入: {line}");
                }
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    let client = QuizClient::from_config(&config)?;
    let (seconds_per_question, default_topic, default_count, max_count) = match client.settings().await {
        Ok(s) => (s.seconds_per_question, s.default_topic, s.default_count, s.max_count),
        Err(e) => {
            log::warn!("读取服务端设置失败，使用本地配置: {e}");
            let quiz = &config.quiz;
            (quiz.seconds_per_question, quiz.default_topic.clone(), quiz.default_count, quiz.max_count)
        }
    };

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let topic = ask(&mut input, &format!("主题 [{default_topic}]: ")).await?;
    let topic = if topic.is_empty() { default_topic } else { topic };
    let count = ask(&mut input, &format!("题目数量 1-{max_count} [{default_count}]: "))
        .await?
        .parse::<usize>()
        .unwrap_or(default_count)
        .clamp(1, max_count.max(1));

    println!("正在生成试题...");
    let quiz = client.generate(&topic, count).await;
    if quiz.is_empty() {
        println!("没有生成任何试题，请稍后重试");
        return Ok(());
    }

    let mut session = QuizSession::new(quiz, seconds_per_question);
    print_quiz(&session);
    run_timer(&mut session, &mut input).await?;

    let total = session.quiz().len();
    println!("\n🎯 得分: {} / {total}", session.score().unwrap_or(0));

    let explanations = client.explain_all(session.quiz()).await;
    for (i, text) in explanations.into_iter().enumerate() {
        session.set_explanation(i, text);
    }

    for (i, question) in session.quiz().iter().enumerate() {
        let chosen = session
            .answers()
            .get(&i)
            .map(|label| label.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mark = if chosen == question.correct_answer.as_str() { "✔" } else { "✘" };
        println!("\n{mark} {}. {}", i + 1, question.question);
        println!("   你的答案: {chosen}  正确答案: {}", question.correct_answer);
        if let Some(explanation) = session.explanation(i) {
            println!("   🧠 {explanation}");
        }
    }
    Ok(())
}
