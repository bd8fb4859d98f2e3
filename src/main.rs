use std::io;

use quizgen::config::Config;
use quizgen::webserver;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("读取配置文件失败: {e}");
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    webserver::run(config).await
}
