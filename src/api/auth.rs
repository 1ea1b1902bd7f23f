use crate::{
    database::MongoDB,
    models::CredentialsRequest,
    services::user_service::{self, AuthStatus},
    utils::error::AppError,
};
use actix_web::{web, Either, HttpResponse};

type Credentials = Either<web::Json<CredentialsRequest>, web::Form<CredentialsRequest>>;

// The site posts URL-encoded forms; API clients send JSON.
fn into_inner(body: Credentials) -> CredentialsRequest {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

#[utoipa::path(
    post,
    path = "/registrar",
    tag = "Auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Usuario guardado"),
        (status = 400, description = "Missing usuario or password"),
        (status = 409, description = "Usuario already exists"),
        (status = 500, description = "Error al registrar")
    )
)]
pub async fn registrar(db: web::Data<MongoDB>, body: Credentials) -> HttpResponse {
    let request = into_inner(body);
    log::info!("📝 POST /registrar - usuario: {}", request.usuario);

    match user_service::create_user(&db, &request.usuario, &request.password).await {
        Ok(_) => HttpResponse::Ok().body("Usuario guardado"),
        Err(AppError::InvalidRequest(e)) => {
            log::warn!("❌ Registration rejected: {}", e);
            HttpResponse::BadRequest().body("Error al registrar")
        }
        Err(AppError::Duplicate(e)) => {
            log::warn!("❌ Registration rejected: {}", e);
            HttpResponse::Conflict().body("Error al registrar")
        }
        Err(e) => {
            log::error!("❌ Registration failed: {}", e);
            HttpResponse::InternalServerError().body("Error al registrar")
        }
    }
}

#[utoipa::path(
    post,
    path = "/autenticar",
    tag = "Auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Match outcome as plain text"),
        (status = 500, description = "Database or hash failure")
    )
)]
pub async fn autenticar(db: web::Data<MongoDB>, body: Credentials) -> HttpResponse {
    let request = into_inner(body);
    log::info!("🔐 POST /autenticar - usuario: {}", request.usuario);

    match user_service::authenticate(&db, &request.usuario, &request.password).await {
        Ok(AuthStatus::Correct) => HttpResponse::Ok().body("El password es correcto"),
        Ok(AuthStatus::Incorrect) => HttpResponse::Ok().body("Contraseña incorrecta"),
        Ok(AuthStatus::NotRegistered) => {
            HttpResponse::Ok().body("El usuario no se encuentra registrado")
        }
        Err(e) => {
            log::error!("❌ Authentication failed: {}", e);
            HttpResponse::InternalServerError().body("Error al autenticar")
        }
    }
}
