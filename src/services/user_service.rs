use crate::{
    database::MongoDB,
    models::User,
    utils::crypto::{hash_password, verify_password},
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReturnDocument;

const USERS_COLLECTION: &str = "users";

/// Outcome of a credential check. No session or token is issued here,
/// the caller only learns whether the pair matched.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Correct,
    Incorrect,
    NotRegistered,
}

fn users(db: &MongoDB) -> mongodb::Collection<User> {
    db.collection::<User>(USERS_COLLECTION)
}

/// Creates a user, hashing the password before it ever touches storage.
pub async fn create_user(db: &MongoDB, usuario: &str, password: &str) -> Result<User, AppError> {
    if usuario.trim().is_empty() || password.is_empty() {
        return Err(AppError::InvalidRequest(
            "usuario and password are required".to_string(),
        ));
    }

    let collection = users(db);

    // Pre-check; the unique index on `usuario` is the backstop for races
    let existing = collection
        .find_one(doc! { "usuario": usuario })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if existing.is_some() {
        return Err(AppError::Duplicate(format!(
            "usuario already exists: {}",
            usuario
        )));
    }

    let mut new_user = User {
        id: None,
        usuario: usuario.to_string(),
        password: hash_password(password)?,
    };

    let result = collection
        .insert_one(&new_user)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    new_user.id = result.inserted_id.as_object_id();

    log::info!("✅ User registered: {}", usuario);

    Ok(new_user)
}

/// Compares a plaintext password against the stored digest.
pub async fn authenticate(
    db: &MongoDB,
    usuario: &str,
    password: &str,
) -> Result<AuthStatus, AppError> {
    let user = match users(db)
        .find_one(doc! { "usuario": usuario })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
    {
        Some(user) => user,
        None => return Ok(AuthStatus::NotRegistered),
    };

    if verify_password(password, &user.password)? {
        Ok(AuthStatus::Correct)
    } else {
        Ok(AuthStatus::Incorrect)
    }
}

/// Returns every user document, insertion order.
pub async fn find_all(db: &MongoDB) -> Result<Vec<User>, AppError> {
    let mut cursor = users(db)
        .find(doc! {})
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let mut result = Vec::new();

    while let Some(user) = cursor.next().await {
        result.push(user.map_err(|e| AppError::DatabaseError(e.to_string()))?);
    }

    Ok(result)
}

/// Looks up a user by its document id.
///
/// A string that does not parse as an ObjectId cannot match any document,
/// so it reports NotFound rather than a request error.
pub async fn find_by_id(db: &MongoDB, id: &str) -> Result<User, AppError> {
    let oid = parse_object_id(id)?;

    users(db)
        .find_one(doc! { "_id": oid })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("user id: {}", id)))
}

pub async fn find_by_usuario(db: &MongoDB, usuario: &str) -> Result<User, AppError> {
    users(db)
        .find_one(doc! { "usuario": usuario })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("usuario: {}", usuario)))
}

/// Replaces username and password for the given id, rehashing
/// unconditionally. Returns the document as stored after the update.
pub async fn update_by_id(
    db: &MongoDB,
    id: &str,
    usuario: &str,
    password: &str,
) -> Result<User, AppError> {
    let oid = parse_object_id(id)?;
    let digest = hash_password(password)?;

    users(db)
        .find_one_and_update(
            doc! { "_id": oid },
            doc! { "$set": { "usuario": usuario, "password": digest } },
        )
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("user id: {}", id)))
}

/// Sets a new password for the named user, rehashing unconditionally.
/// The username itself is never touched by this path.
pub async fn update_password_by_usuario(
    db: &MongoDB,
    usuario: &str,
    password: &str,
) -> Result<User, AppError> {
    let digest = hash_password(password)?;

    users(db)
        .find_one_and_update(
            doc! { "usuario": usuario },
            doc! { "$set": { "password": digest } },
        )
        .return_document(ReturnDocument::After)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?
        .ok_or_else(|| AppError::NotFound(format!("usuario: {}", usuario)))
}

pub async fn delete_by_id(db: &MongoDB, id: &str) -> Result<(), AppError> {
    let oid = parse_object_id(id)?;

    let result = users(db)
        .delete_one(doc! { "_id": oid })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(format!("user id: {}", id)));
    }

    log::info!("🗑️ User deleted by id: {}", id);
    Ok(())
}

pub async fn delete_by_usuario(db: &MongoDB, usuario: &str) -> Result<(), AppError> {
    let result = users(db)
        .delete_one(doc! { "usuario": usuario })
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    if result.deleted_count == 0 {
        return Err(AppError::NotFound(format!("usuario: {}", usuario)));
    }

    log::info!("🗑️ User deleted: {}", usuario);
    Ok(())
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::NotFound(format!("user id: {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        MongoDB::new("mongodb://localhost:27017/pasteleriaColibriTest")
            .await
            .expect("MongoDB must be running for these tests")
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        let err = parse_object_id("not-an-object-id").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_create_never_stores_plaintext() {
        let db = test_db().await;
        let _ = delete_by_usuario(&db, "ana").await;

        let created = create_user(&db, "ana", "secret1").await.unwrap();
        assert_ne!(created.password, "secret1");

        let found = find_by_usuario(&db, "ana").await.unwrap();
        assert_eq!(found.usuario, "ana");
        assert_ne!(found.password, "secret1");

        delete_by_usuario(&db, "ana").await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_duplicate_usuario_rejected() {
        let db = test_db().await;
        let _ = delete_by_usuario(&db, "dup").await;

        create_user(&db, "dup", "secret1").await.unwrap();
        let err = create_user(&db, "dup", "secret2").await.unwrap_err();
        assert!(matches!(err, AppError::Duplicate(_)));

        delete_by_usuario(&db, "dup").await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_authenticate_three_outcomes() {
        let db = test_db().await;
        let _ = delete_by_usuario(&db, "auth").await;

        create_user(&db, "auth", "secret1").await.unwrap();

        assert_eq!(
            authenticate(&db, "auth", "secret1").await.unwrap(),
            AuthStatus::Correct
        );
        assert_eq!(
            authenticate(&db, "auth", "wrong").await.unwrap(),
            AuthStatus::Incorrect
        );
        assert_eq!(
            authenticate(&db, "nobody", "secret1").await.unwrap(),
            AuthStatus::NotRegistered
        );

        delete_by_usuario(&db, "auth").await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_update_rehashes_same_plaintext() {
        let db = test_db().await;
        let _ = delete_by_usuario(&db, "rehash").await;

        let created = create_user(&db, "rehash", "secret1").await.unwrap();
        let updated = update_password_by_usuario(&db, "rehash", "secret1")
            .await
            .unwrap();

        // Fresh salt every time, even for an identical plaintext
        assert_ne!(created.password, updated.password);
        assert_eq!(updated.usuario, "rehash");
        assert_eq!(
            authenticate(&db, "rehash", "secret1").await.unwrap(),
            AuthStatus::Correct
        );

        delete_by_usuario(&db, "rehash").await.unwrap();
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_delete_missing_is_not_found() {
        let db = test_db().await;

        let err = delete_by_usuario(&db, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = delete_by_id(&db, &ObjectId::new().to_hex()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
