//! Route guard: the client-side navigation-authorization decision.
//!
//! This is a UX convenience only. The authoritative boundary is the
//! server-side check in [`crate::authorize`]; a guard decision is never
//! trusted by a privileged endpoint.

use serde::{Deserialize, Serialize};

use streamhub_entity::user::Role;

use crate::session::state::SessionState;

/// Navigable views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Login / sign-up screen.
    Login,
    /// The home feed.
    Home,
    /// Video playback.
    Watch,
    /// Admin dashboard (upload, edit, delete).
    AdminDashboard,
}

/// What a view requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Reachable without a session.
    Public,
    /// Requires a signed-in identity.
    Authenticated,
    /// Requires the admin role.
    Admin,
}

impl View {
    /// The access level this view requires.
    pub fn access(&self) -> Access {
        match self {
            Self::Login => Access::Public,
            Self::Home | Self::Watch => Access::Authenticated,
            Self::AdminDashboard => Access::Admin,
        }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Allow,
    /// Navigate to another view instead.
    RedirectTo(View),
    /// The credential restore is still in flight; render a loading state.
    ShowLoading,
}

/// Pure navigation-authorization function.
///
/// No I/O, no clock, no global state: the decision depends only on the
/// requested view and the session snapshot, so the full decision table
/// is enumerable in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Decide whether `view` may be rendered under `state`.
    ///
    /// While the session is not ready, every view shows loading; this is
    /// what prevents a flash of unauthorized content during the initial
    /// credential restore.
    pub fn decide(view: View, state: &SessionState) -> RouteDecision {
        if !state.ready {
            return RouteDecision::ShowLoading;
        }

        match view.access() {
            Access::Public => RouteDecision::Allow,
            Access::Authenticated => {
                if state.is_authenticated() {
                    RouteDecision::Allow
                } else {
                    RouteDecision::RedirectTo(View::Login)
                }
            }
            Access::Admin => {
                if !state.is_authenticated() {
                    RouteDecision::RedirectTo(View::Login)
                } else if state.role == Some(Role::Admin) {
                    RouteDecision::Allow
                } else {
                    RouteDecision::RedirectTo(View::Home)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::state::Identity;

    const ALL_VIEWS: [View; 4] = [View::Login, View::Home, View::Watch, View::AdminDashboard];

    fn loading() -> SessionState {
        SessionState::initial()
    }

    fn anonymous() -> SessionState {
        SessionState {
            identity: None,
            role: None,
            ready: true,
        }
    }

    fn signed_in(role: Role) -> SessionState {
        SessionState {
            identity: Some(Identity::new("someone@example.com", "tok")),
            role: Some(role),
            ready: true,
        }
    }

    #[test]
    fn every_view_shows_loading_before_ready() {
        for view in ALL_VIEWS {
            assert_eq!(
                RouteGuard::decide(view, &loading()),
                RouteDecision::ShowLoading,
                "{view:?} must show loading while not ready"
            );
        }
    }

    #[test]
    fn decision_table() {
        let cases = [
            // (view, state, expected)
            (View::Login, anonymous(), RouteDecision::Allow),
            (View::Home, anonymous(), RouteDecision::RedirectTo(View::Login)),
            (View::Watch, anonymous(), RouteDecision::RedirectTo(View::Login)),
            (
                View::AdminDashboard,
                anonymous(),
                RouteDecision::RedirectTo(View::Login),
            ),
            (View::Login, signed_in(Role::User), RouteDecision::Allow),
            (View::Home, signed_in(Role::User), RouteDecision::Allow),
            (View::Watch, signed_in(Role::User), RouteDecision::Allow),
            (
                View::AdminDashboard,
                signed_in(Role::User),
                RouteDecision::RedirectTo(View::Home),
            ),
            (View::Home, signed_in(Role::Admin), RouteDecision::Allow),
            (
                View::AdminDashboard,
                signed_in(Role::Admin),
                RouteDecision::Allow,
            ),
        ];

        for (view, state, expected) in cases {
            assert_eq!(
                RouteGuard::decide(view, &state),
                expected,
                "view={view:?} state={state:?}"
            );
        }
    }
}
