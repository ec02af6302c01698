use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lecture_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers::{configure, json_config},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    log::info!(
        "OPENAI_API_KEY: {}",
        if config.has_api_key() { "Loaded" } else { "Not Found" }
    );
    if let Err(err) = config.validate() {
        log::error!("{}", err);
        return Err(io::Error::other(err));
    }

    let state = AppState::new(config.clone())
        .await
        .map_err(io::Error::other)?;

    log::info!(
        "starting HTTP server on {}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "rendering {} into {}",
        config.template_path.display(),
        config.quiz_output_dir.display()
    );

    let max_request_bytes = config.max_request_bytes;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config(max_request_bytes))
            .wrap(RequestIdMiddleware)
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
