mod api;
mod database;
mod form;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017/pasteleriaColibri".to_string());

    log::info!("🚀 Starting Pastelería Colibrí user service...");
    log::info!("📊 Database: {}", database_url);

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&database_url)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db.clone());

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Auth endpoints
            .route("/registrar", web::post().to(api::auth::registrar))
            .route("/autenticar", web::post().to(api::auth::autenticar))
            // Usuarios: username-keyed routes first so they never match as {id}
            .route(
                "/usuarios/buscar/{usuario}",
                web::get().to(api::users::find_user_by_name),
            )
            .route(
                "/usuarios/modificar/{usuario}",
                web::put().to(api::users::update_user_by_name),
            )
            .route(
                "/usuarios/eliminar/{usuario}",
                web::delete().to(api::users::delete_user_by_name),
            )
            // Usuarios: list and id-keyed CRUD
            .route("/usuarios", web::get().to(api::users::list_users))
            .route("/usuarios/{id}", web::get().to(api::users::get_user))
            .route("/usuarios/{id}", web::put().to(api::users::update_user))
            .route("/usuarios/{id}", web::delete().to(api::users::delete_user))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
