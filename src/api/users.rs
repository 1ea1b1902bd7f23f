use crate::{
    database::MongoDB,
    models::{UpdatePasswordRequest, UpdateUserRequest, User},
    services::user_service,
    utils::error::AppError,
};
use actix_web::{web, Either, HttpResponse};

type Body<T> = Either<web::Json<T>, web::Form<T>>;

fn into_inner<T>(body: Body<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

#[utoipa::path(
    get,
    path = "/usuarios",
    tag = "Usuarios",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_users(db: web::Data<MongoDB>) -> HttpResponse {
    log::info!("📋 GET /usuarios");

    match user_service::find_all(&db).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            log::error!("❌ Failed to list users: {}", e);
            HttpResponse::InternalServerError().body("Error al listar los usuarios")
        }
    }
}

#[utoipa::path(
    get,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "Usuario no encontrado")
    )
)]
pub async fn get_user(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔍 GET /usuarios/{}", id);

    match user_service::find_by_id(&db, &id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().body("Usuario no encontrado"),
        Err(e) => {
            log::error!("❌ Failed to fetch user {}: {}", id, e);
            HttpResponse::InternalServerError().body("Error al buscar el usuario")
        }
    }
}

#[utoipa::path(
    put,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = String, Path, description = "Document id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 404, description = "Usuario no encontrado")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: Body<UpdateUserRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    let request = into_inner(body);
    log::info!("✏️ PUT /usuarios/{} - usuario: {}", id, request.usuario);

    match user_service::update_by_id(&db, &id, &request.usuario, &request.password).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().body("Usuario no encontrado"),
        Err(e) => {
            log::error!("❌ Failed to update user {}: {}", id, e);
            HttpResponse::InternalServerError().body("Error al modificar el usuario")
        }
    }
}

#[utoipa::path(
    delete,
    path = "/usuarios/{id}",
    tag = "Usuarios",
    params(("id" = String, Path, description = "Document id")),
    responses(
        (status = 200, description = "Usuario eliminado"),
        (status = 404, description = "Usuario no encontrado")
    )
)]
pub async fn delete_user(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /usuarios/{}", id);

    match user_service::delete_by_id(&db, &id).await {
        Ok(()) => HttpResponse::Ok().body("Usuario eliminado"),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().body("Usuario no encontrado"),
        Err(e) => {
            log::error!("❌ Failed to delete user {}: {}", id, e);
            HttpResponse::InternalServerError().body("Error al eliminar el usuario")
        }
    }
}

#[utoipa::path(
    get,
    path = "/usuarios/buscar/{usuario}",
    tag = "Usuarios",
    params(("usuario" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "Usuario no encontrado"),
        (status = 500, description = "Error al buscar el usuario")
    )
)]
pub async fn find_user_by_name(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let usuario = path.into_inner();
    log::info!("🔍 GET /usuarios/buscar/{}", usuario);

    match user_service::find_by_usuario(&db, &usuario).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().body("Usuario no encontrado"),
        Err(e) => {
            log::error!("❌ Failed to fetch usuario {}: {}", usuario, e);
            HttpResponse::InternalServerError().body("Error al buscar el usuario")
        }
    }
}

#[utoipa::path(
    put,
    path = "/usuarios/modificar/{usuario}",
    tag = "Usuarios",
    params(("usuario" = String, Path, description = "Username")),
    request_body = UpdatePasswordRequest,
    responses(
        (status = 200, description = "Usuario actualizado"),
        (status = 404, description = "Usuario no encontrado"),
        (status = 500, description = "Error al modificar el usuario")
    )
)]
pub async fn update_user_by_name(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: Body<UpdatePasswordRequest>,
) -> HttpResponse {
    let usuario = path.into_inner();
    let request = into_inner(body);
    log::info!("✏️ PUT /usuarios/modificar/{}", usuario);

    match user_service::update_password_by_usuario(&db, &usuario, &request.password).await {
        Ok(_) => HttpResponse::Ok().body("Usuario actualizado"),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().body("Usuario no encontrado"),
        Err(e) => {
            log::error!("❌ Failed to update usuario {}: {}", usuario, e);
            HttpResponse::InternalServerError().body("Error al modificar el usuario")
        }
    }
}

#[utoipa::path(
    delete,
    path = "/usuarios/eliminar/{usuario}",
    tag = "Usuarios",
    params(("usuario" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Usuario eliminado"),
        (status = 404, description = "Usuario no encontrado"),
        (status = 500, description = "Error al eliminar el usuario")
    )
)]
pub async fn delete_user_by_name(db: web::Data<MongoDB>, path: web::Path<String>) -> HttpResponse {
    let usuario = path.into_inner();
    log::info!("🗑️ DELETE /usuarios/eliminar/{}", usuario);

    match user_service::delete_by_usuario(&db, &usuario).await {
        Ok(()) => HttpResponse::Ok().body("Usuario eliminado"),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().body("Usuario no encontrado"),
        Err(e) => {
            log::error!("❌ Failed to delete usuario {}: {}", usuario, e);
            HttpResponse::InternalServerError().body("Error al eliminar el usuario")
        }
    }
}
