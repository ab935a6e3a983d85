//! `AuthUser` extractor — pulls the Bearer token from the Authorization
//! header, validates it, and re-derives the role for this request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use streamhub_auth::authorize::RequestPrincipal;
use streamhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// A missing header is `Unauthenticated`; a present-but-invalid token is
/// `InvalidCredential`. The role is resolved from the allowlist on every
/// extraction — no stored or client-asserted role is consulted.
#[derive(Debug, Clone)]
pub struct AuthUser {
    principal: RequestPrincipal,
    /// JWT ID of the presented access token, kept for logout revocation.
    pub jti: Uuid,
}

impl AuthUser {
    /// The principal with its freshly derived role.
    pub fn principal(&self) -> &RequestPrincipal {
        &self.principal
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestPrincipal;
    fn deref(&self) -> &Self::Target {
        &self.principal
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        let claims = state.jwt_decoder.decode_access_token(token).await?;

        let principal =
            RequestPrincipal::resolve(&state.role_resolver, claims.user_id(), claims.email.clone());

        Ok(AuthUser {
            principal,
            jti: claims.jti,
        })
    }
}
