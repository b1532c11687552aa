mod schedules;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use schedules::ScheduleStore;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);
    let dist_dir = env::var("DIST_DIR").unwrap_or_else(|_| "./dist".to_string());

    let store = match env::var("TRAIN_SCHEDULES") {
        Ok(path) => ScheduleStore::load(&path).map_err(std::io::Error::other)?,
        Err(_) => ScheduleStore::default(),
    };
    log::info!("Serving {} train schedules", store.len());
    let store = web::Data::new(store);

    log::info!("Starting server on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(schedules::configure)
            .service(Files::new("/", &dist_dir).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
