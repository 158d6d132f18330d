use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};

use notekeeper::{
    config::Config,
    handlers,
    store::{NoteStore, PgNoteStore},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Requests are only accepted once the store is reachable.
    let store: Arc<dyn NoteStore> = match PgNoteStore::connect(&config.store) {
        Ok(store) => {
            log::info!(
                "Connected to database '{}', collection '{}'.",
                config.store.database_name,
                config.store.collection_name
            );
            Arc::new(store)
        }
        Err(e) => {
            log::error!("Error connecting to the database: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                e.to_string(),
            ));
        }
    };
    let store = web::Data::from(store);
    let static_dir = config.static_dir.clone();

    log::info!("Server is running on http://{}", config.socket_addr());

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(handlers::routes)
            .service(Files::new("/", &static_dir).index_file("index.html"))
    })
    .bind(config.socket_addr())?
    .run()
    .await
}
