//! Authentication CLI commands: login, logout, register, whoami.

use clap::Args;

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};
use crate::session::{self, PersistedSession};
use streamhub_core::error::AppError;

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,
}

/// Arguments for the register command
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Account email
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long)]
    pub password: String,

    /// Display name
    #[arg(short, long)]
    pub display_name: Option<String>,
}

/// Sign in and persist the session file
pub async fn login(args: &LoginArgs, server: &str) -> Result<(), AppError> {
    let client = ApiClient::new(server, None);
    let response = client.login(&args.email, &args.password).await?;

    session::save(&PersistedSession {
        email: response.user.email.clone(),
        access_token: response.access_token,
        refresh_token: response.refresh_token,
        access_expires_at: response.access_expires_at,
    })
    .await?;

    output::print_success(&format!(
        "Signed in as {} ({})",
        response.user.email, response.user.role
    ));
    Ok(())
}

/// Revoke tokens server-side and clear the local session
pub async fn logout(server: &str) -> Result<(), AppError> {
    let Some(persisted) = session::load().await? else {
        output::print_warning("Not signed in");
        return Ok(());
    };

    let client = ApiClient::new(server, Some(persisted.access_token.clone()));
    if let Err(e) = client.logout(Some(&persisted.refresh_token)).await {
        // Clear the local session even if the server is unreachable or
        // the token already expired.
        output::print_warning(&format!("Server-side logout failed: {}", e));
    }
    session::clear().await?;

    output::print_success("Signed out");
    Ok(())
}

/// Register a new account
pub async fn register(
    args: &RegisterArgs,
    server: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = ApiClient::new(server, None);
    let user = client
        .register(&args.email, &args.password, args.display_name.as_deref())
        .await?;

    output::print_success("Account created");
    output::print_item(&user, format);
    Ok(())
}

/// Show the signed-in account as the server sees it
pub async fn whoami(server: &str, format: OutputFormat) -> Result<(), AppError> {
    let Some(persisted) = session::load().await? else {
        output::print_warning("Not signed in");
        return Ok(());
    };

    let client = ApiClient::new(server, Some(persisted.access_token));
    let user = client.me().await?;
    output::print_item(&user, format);
    Ok(())
}
