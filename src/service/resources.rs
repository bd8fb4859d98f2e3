use std::path::{Component, Path, PathBuf};

use actix_files::NamedFile;
use actix_web::{error, web, HttpRequest};

use crate::config::Config;

// 静态资源
pub(crate) async fn resources(req: HttpRequest, config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    let filename = req.match_info().query("filename").to_string();
    let relative = Path::new(&filename);
    // 只允许普通的路径片段，防止跳出资源目录
    if filename.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        log::warn!("拒绝访问资源路径: {filename}");
        return Err(error::ErrorNotFound("not found"));
    }
    let mut path = PathBuf::from(&config.server.resources_dir);
    path.push(relative);
    Ok(NamedFile::open(path)?)
}
