//! Navigate to a client view through the route guard.
//!
//! Restores the persisted session into a session store, then asks the
//! route guard whether the requested view may render. The guard decision
//! is a navigation convenience only; the server still re-checks every
//! privileged request.

use clap::Args;

use crate::client::ApiClient;
use crate::output;
use crate::session;
use streamhub_auth::guard::{RouteDecision, RouteGuard, View};
use streamhub_core::error::AppError;

/// Arguments for the open command
#[derive(Debug, Args)]
pub struct OpenArgs {
    /// View to open
    #[arg(value_enum)]
    pub view: ViewArg,
}

/// CLI-facing view names
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ViewArg {
    Login,
    Home,
    Watch,
    AdminDashboard,
}

impl From<ViewArg> for View {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Login => View::Login,
            ViewArg::Home => View::Home,
            ViewArg::Watch => View::Watch,
            ViewArg::AdminDashboard => View::AdminDashboard,
        }
    }
}

/// Execute the open command
pub async fn execute(args: &OpenArgs, config_path: &str, server: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let (store, persisted) = session::restore_store(&config).await?;

    let view = View::from(args.view);
    let state = store.current();
    match RouteGuard::decide(view, &state) {
        RouteDecision::ShowLoading => {
            // restore_store completes the restore before returning, so
            // this arm does not fire from this command.
            output::print_warning("Session restore still in progress");
        }
        RouteDecision::RedirectTo(target) => {
            output::print_warning(&format!(
                "Access to {:?} denied; redirected to {:?}",
                view, target
            ));
            render(target, server, persisted.as_ref()).await?;
        }
        RouteDecision::Allow => {
            render(view, server, persisted.as_ref()).await?;
        }
    }
    Ok(())
}

/// Render a rough textual equivalent of each client view.
async fn render(
    view: View,
    server: &str,
    persisted: Option<&session::PersistedSession>,
) -> Result<(), AppError> {
    match view {
        View::Login => {
            println!("── Login ──");
            println!("Sign in with: streamhub login --email <email> --password <password>");
        }
        View::Home | View::Watch => {
            let token = persisted.map(|s| s.access_token.clone());
            let client = ApiClient::new(server, token);
            let videos = client.list_videos(None).await?;

            println!("── {} ──", if view == View::Home { "Home" } else { "Watch" });
            for video in &videos.items {
                println!("  {}  {}", video.id, video.title);
            }
            if videos.items.is_empty() {
                println!("  (no videos yet)");
            }
        }
        View::AdminDashboard => {
            let token = persisted.map(|s| s.access_token.clone());
            let client = ApiClient::new(server, token);
            let videos = client.list_videos(None).await?;

            println!("── Admin Dashboard ──");
            output::print_kv("Videos", &videos.total.to_string());
            println!("Manage the catalog with: streamhub video --help");
        }
    }
    Ok(())
}
