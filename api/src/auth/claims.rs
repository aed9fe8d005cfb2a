use serde::{Deserialize, Serialize};

/// JWT claim set carried by every bearer token.
///
/// `sub` holds the email of the authenticated user; the token itself is
/// the only thing a client ever sees.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub exp: usize,
}

/// Verified token claims, extracted from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
