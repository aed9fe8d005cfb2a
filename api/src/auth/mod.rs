pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use util::config;

/// Issuer string embedded in every token and checked during verification.
pub const TOKEN_ISSUER: &str = "cohort-tools-api";

/// Generates a JWT and its expiry timestamp for a given user email.
pub fn generate_jwt(email: &str) -> (String, String) {
    let jwt_secret = config::jwt_secret();
    let jwt_duration_minutes = config::jwt_duration_minutes();

    let expiry = Utc::now() + Duration::minutes(jwt_duration_minutes as i64);

    let claims = Claims {
        sub: email.to_owned(),
        iss: TOKEN_ISSUER.to_owned(),
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}
