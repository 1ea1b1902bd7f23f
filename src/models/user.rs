use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document stored in the `users` collection.
///
/// `password` always holds a bcrypt digest once persisted - hashing happens
/// explicitly in the service layer before any insert or update.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub usuario: String,
    pub password: String,
}

/// Body for POST /registrar and POST /autenticar.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CredentialsRequest {
    pub usuario: String,
    pub password: String,
}

/// Body for PUT /usuarios/{id} - replaces username and password.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    pub usuario: String,
    pub password: String,
}

/// Body for PUT /usuarios/modificar/{usuario} - password only, the
/// username stays as-is.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_user_serializes_without_id() {
        let user = User {
            id: None,
            usuario: "ana".to_string(),
            password: "$2b$10$abcdef".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["usuario"], "ana");
    }

    #[test]
    fn test_credentials_accept_json_body() {
        let request: CredentialsRequest =
            serde_json::from_str(r#"{"usuario":"ana","password":"secret1"}"#).unwrap();
        assert_eq!(request.usuario, "ana");
        assert_eq!(request.password, "secret1");
    }
}
