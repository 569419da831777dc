use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use std::env;
use std::path::{Path, PathBuf};

/// Directory the external simulator writes one position file per cycle into.
const DEFAULT_FEED_DIR: &str = "./out";

#[derive(Clone)]
struct FeedConfig {
    feed_dir: PathBuf,
}

/// Current position payload: the newest file in the simulator's output
/// directory, returned verbatim. All parsing and validation happens in the
/// app, where it is testable; this endpoint only picks the file.
#[get("/api/positions")]
async fn positions(config: web::Data<FeedConfig>) -> impl Responder {
    let Some(path) = newest_file(&config.feed_dir) else {
        return HttpResponse::NoContent().finish();
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => HttpResponse::Ok().content_type("text/csv").body(content),
        Err(e) => {
            log::error!("failed to read {}: {e}", path.display());
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn newest_file(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .max_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok())
        .map(|entry| entry.path())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Get port from environment or default to 8080
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let feed_dir = env::var("FEED_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_FEED_DIR));

    log::info!(
        "Starting server on 0.0.0.0:{port}, feed dir {}",
        feed_dir.display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(FeedConfig {
                feed_dir: feed_dir.clone(),
            }))
            .service(positions)
            .service(Files::new("/data", "./data"))
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
