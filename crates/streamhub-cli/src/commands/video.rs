//! Video catalog CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::client::ApiClient;
use crate::output::{self, OutputFormat};
use crate::session;
use streamhub_core::error::AppError;

/// Arguments for video commands
#[derive(Debug, Args)]
pub struct VideoArgs {
    /// Video subcommand
    #[command(subcommand)]
    pub command: VideoCommand,
}

/// Video subcommands
#[derive(Debug, Subcommand)]
pub enum VideoCommand {
    /// List videos
    List {
        /// Case-insensitive title/description filter
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show one video
    Get {
        /// Video ID
        id: String,
    },
}

/// Video display row for table output
#[derive(Debug, Serialize, Tabled)]
struct VideoRow {
    /// Video ID
    id: String,
    /// Title
    title: String,
    /// Media URL
    video_url: String,
    /// Created at
    created_at: String,
}

/// Execute video commands
pub async fn execute(
    args: &VideoArgs,
    server: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let token = session::load().await?.map(|s| s.access_token);
    let client = ApiClient::new(server, token);

    match &args.command {
        VideoCommand::List { query } => {
            let videos = client.list_videos(query.as_deref()).await?;
            let rows: Vec<VideoRow> = videos
                .items
                .iter()
                .map(|v| VideoRow {
                    id: v.id.to_string(),
                    title: v.title.clone(),
                    video_url: v.video_url.clone(),
                    created_at: v.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        VideoCommand::Get { id } => {
            let video = client.get_video(id).await?;
            output::print_item(&video, format);
        }
    }

    Ok(())
}
