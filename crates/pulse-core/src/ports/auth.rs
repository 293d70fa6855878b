//! Token verification port.

use uuid::Uuid;

/// Claims carried by a verified bearer token.
///
/// Display name and avatar ride along in the token so that post and
/// comment creation can denormalize author fields without trusting the
/// request body.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub name: String,
    pub avatar: String,
    pub exp: i64,
}

/// Token service trait - the injected verification capability.
///
/// Token issuance lives with an external identity collaborator; this
/// service only needs `validate_token`, but implementations also expose
/// `generate_token` so operators and tests can mint credentials.
pub trait TokenService: Send + Sync {
    /// Generate an access token for a user.
    fn generate_token(
        &self,
        user_id: Uuid,
        name: &str,
        avatar: &str,
    ) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
