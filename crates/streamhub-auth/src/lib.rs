//! # streamhub-auth
//!
//! Authentication and authorization for the StreamHub platform.
//!
//! ## Modules
//!
//! - `jwt` — token creation, validation, and revocation
//! - `password` — Argon2id password hashing
//! - `allowlist` — the immutable admin email allowlist
//! - `resolver` — derives a role from an identity
//! - `session` — client session state, driven by auth-state events
//! - `guard` — pure navigation-authorization decision function
//! - `authorize` — per-request admin enforcement for privileged mutations

pub mod allowlist;
pub mod authorize;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod resolver;
pub mod session;

pub use allowlist::AdminAllowlist;
pub use authorize::RequestPrincipal;
pub use guard::{RouteDecision, RouteGuard, View};
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::PasswordHasher;
pub use resolver::RoleResolver;
pub use session::{AuthEvent, AuthEventBus, Identity, SessionState, SessionStore};
