//! JWT token validation and revocation checking.
//!
//! The decoder is the Credential Verifier for the stateless-token
//! variant: signature, expiry, token type, and revocation are all checked
//! before a claim is trusted.

use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use moka::future::Cache;
use uuid::Uuid;

use streamhub_core::config::auth::AuthConfig;
use streamhub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens and tracks revoked token IDs.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
    /// Revoked JWT IDs. Entries expire with the longest token lifetime,
    /// after which the token itself is already past its `exp`.
    revoked: Cache<Uuid, ()>,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        let revoked = Cache::builder()
            .max_capacity(100_000)
            .time_to_live(Duration::from_secs(config.jwt_refresh_ttl_hours * 3600))
            .build();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            revoked,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Token type is Access
    /// 4. JTI not revoked
    pub async fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::invalid_credential(
                "Invalid token type: expected access token",
            ));
        }

        self.check_revoked(&claims.jti).await?;

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub async fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::invalid_credential(
                "Invalid token type: expected refresh token",
            ));
        }

        self.check_revoked(&claims.jti).await?;

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_credential("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_credential("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_credential("Invalid token signature")
                    }
                    _ => AppError::invalid_credential(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Checks whether the given JWT ID has been revoked.
    async fn check_revoked(&self, jti: &Uuid) -> Result<(), AppError> {
        if self.revoked.get(jti).await.is_some() {
            return Err(AppError::invalid_credential("Token has been revoked"));
        }
        Ok(())
    }

    /// Revokes a JWT ID (logout).
    pub async fn revoke(&self, jti: Uuid) {
        self.revoked.insert(jti, ()).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use streamhub_core::error::ErrorKind;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[tokio::test]
    async fn round_trip_access_token() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let user_id = Uuid::new_v4();
        let pair = encoder.generate_token_pair(user_id, "user@example.com").unwrap();

        let claims = decoder.decode_access_token(&pair.access_token).await.unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.email, "user@example.com");
    }

    #[tokio::test]
    async fn refresh_token_rejected_as_access() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), "user@example.com")
            .unwrap();

        let err = decoder
            .decode_access_token(&pair.refresh_token)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredential);
    }

    #[tokio::test]
    async fn malformed_token_is_invalid_credential() {
        let decoder = JwtDecoder::new(&config());
        let err = decoder.decode_access_token("not-a-jwt").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredential);
    }

    #[tokio::test]
    async fn tampered_signature_is_rejected() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);

        let other = AuthConfig {
            jwt_secret: "different-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), "user@example.com")
            .unwrap();
        assert!(decoder.decode_access_token(&pair.access_token).await.is_err());
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() {
        let cfg = config();
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), "user@example.com")
            .unwrap();
        let claims = decoder.decode_access_token(&pair.access_token).await.unwrap();

        decoder.revoke(claims.jti).await;
        assert!(decoder.decode_access_token(&pair.access_token).await.is_err());
    }
}
