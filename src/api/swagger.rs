use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pastelería Colibrí API",
        version = "1.0.0",
        description = "User management backend for the Pastelería Colibrí site.\n\n**Features:**\n- Registration with bcrypt-hashed credentials\n- Credential authentication (match report only, no sessions)\n- User CRUD by document id or by username\n- Health monitoring",
    ),
    paths(
        // Auth endpoints
        crate::api::auth::registrar,
        crate::api::auth::autenticar,

        // Usuarios
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
        crate::api::users::find_user_by_name,
        crate::api::users::update_user_by_name,
        crate::api::users::delete_user_by_name,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::user::User,
            crate::models::user::CredentialsRequest,
            crate::models::user::UpdateUserRequest,
            crate::models::user::UpdatePasswordRequest,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and credential check endpoints. No session or token is issued."),
        (name = "Usuarios", description = "User CRUD endpoints, keyed by document id or by username."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    )
)]
pub struct ApiDoc;
