use std::path::PathBuf;

use actix_files::NamedFile;
use actix_web::web;

use crate::config::Config;

pub(crate) async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    let path = PathBuf::from(&config.server.templates_dir).join("index.html");
    Ok(NamedFile::open(path)?)
}
