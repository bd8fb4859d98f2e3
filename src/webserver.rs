use std::io;

use actix_web::{web, App, HttpServer};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::service::{pages, quiz, resources};

/// 注册页面、静态资源和API路由
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(pages::index))
        .route("/resources/{filename:.*}", web::get().to(resources::resources))
        .service(
            web::scope("/api")
                .route("/generate-quiz", web::post().to(quiz::generate_quiz))
                .route("/explain", web::post().to(quiz::explain))
                .route("/settings", web::get().to(quiz::settings)),
        );
}

// 启动actix服务
pub async fn run(config: Config) -> io::Result<()> {
    if config.llm.api_key.is_empty() {
        log::warn!("未设置OPENROUTER_API_KEY，生成试题的请求将会失败");
    }
    let llm = LlmClient::new(&config.llm).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let llm = web::Data::new(llm);
    let addr = (config.server.host.clone(), config.server.port);
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(actix_web::middleware::Logger::default())
            .app_data(config.clone())
            .app_data(llm.clone())
            .configure(configure)
    })
    .bind(&addr)?
    .run();
    log::info!("HTTP服务启动成功，监听 http://{}:{}", addr.0, addr.1);
    server.await
}
