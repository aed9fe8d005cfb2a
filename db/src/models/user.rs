use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};
use serde::Serialize;

/// Represents a user in the `users` table.
///
/// `password_hash` never leaves the server: it is skipped during
/// serialization so a `Model` can be attached to a request or returned
/// to a client without leaking the credential.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// User's unique email address.
    pub email: String,
    /// Argon2 hash of the password.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("No RelationDef implemented")
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new user, hashing the supplied password with a fresh
    /// random salt.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, DbErr> {
        let password_hash = hash_password(password)?;
        let now = Utc::now();

        let user = ActiveModel {
            id: NotSet,
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(password_hash),
            created_at: Set(now),
            updated_at: Set(now),
        };

        user.insert(db).await
    }

    pub async fn get_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Checks a password against the stored hash for the given email.
    ///
    /// Returns `Ok(None)` both when no such user exists and when the
    /// password does not match, so callers cannot distinguish the two.
    pub async fn verify_credentials(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<Option<Self>, DbErr> {
        let Some(user) = Self::get_by_email(db, email).await? else {
            return Ok(None);
        };

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| DbErr::Custom(format!("Stored password hash is invalid: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(Some(user)),
            Err(_) => Ok(None),
        }
    }
}

fn hash_password(password: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| DbErr::Custom(format!("Password hashing failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::Model as User;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn create_hashes_password() {
        let db = setup_test_db().await;

        let user = User::create(&db, "Ada", "ada@example.com", "hunter22")
            .await
            .unwrap();

        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_ne!(user.password_hash, "hunter22");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let db = setup_test_db().await;

        User::create(&db, "Ada", "dup@example.com", "hunter22")
            .await
            .unwrap();
        let second = User::create(&db, "Grace", "dup@example.com", "other-pass").await;

        assert!(second.is_err());
        assert!(
            second
                .unwrap_err()
                .to_string()
                .contains("UNIQUE constraint failed")
        );
    }

    #[tokio::test]
    async fn verify_credentials_accepts_correct_password() {
        let db = setup_test_db().await;

        let created = User::create(&db, "Ada", "login@example.com", "hunter22")
            .await
            .unwrap();
        let verified = User::verify_credentials(&db, "login@example.com", "hunter22")
            .await
            .unwrap();

        assert_eq!(verified.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn verify_credentials_hides_which_part_failed() {
        let db = setup_test_db().await;

        User::create(&db, "Ada", "secret@example.com", "hunter22")
            .await
            .unwrap();

        let bad_password = User::verify_credentials(&db, "secret@example.com", "wrong")
            .await
            .unwrap();
        let unknown_email = User::verify_credentials(&db, "ghost@example.com", "hunter22")
            .await
            .unwrap();

        assert!(bad_password.is_none());
        assert!(unknown_email.is_none());
    }

    #[tokio::test]
    async fn password_hash_is_not_serialized() {
        let db = setup_test_db().await;

        let user = User::create(&db, "Ada", "wire@example.com", "hunter22")
            .await
            .unwrap();
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "wire@example.com");
    }
}
