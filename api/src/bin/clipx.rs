//! Command-line front end for a running ClipX server.
//!
//! Validates the input locally, asks the server to clip the post, then pulls
//! the finished clip through the download proxy into `--output`.
//!
//! ## Environment Variables
//! - `CLIPX_SERVER` - ClipX server base URL (default: `http://localhost:3000`)
//! - `RUST_LOG` - log filter (default: `info`)

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clipx::client::ApiClient;
use clipx::save::FileSink;
use clipx::ui::{Phase, TimeField, UiController};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Clip an X/Twitter video through a ClipX server")]
struct Args {
    /// Post URL (twitter.com or x.com)
    url: String,

    /// Clip start, HH:MM:SS
    #[arg(short, long, default_value = "")]
    start: String,

    /// Clip end, HH:MM:SS
    #[arg(short, long, default_value = "")]
    end: String,

    /// ClipX server base URL
    #[arg(long, env = "CLIPX_SERVER", default_value = "http://localhost:3000")]
    server: String,

    /// Directory the clip is saved into
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let client = ApiClient::new(args.server);
    info!(server = client.base_url(), "using ClipX server");

    let mut ui = UiController::new(client);
    ui.set_tweet_url(args.url);
    for (field, value) in [(TimeField::Start, args.start), (TimeField::End, args.end)] {
        ui.set_time(field, value);
        if let Some(message) = &ui.state().time_error {
            warn!("{}", message);
        }
    }

    // Renders progress while the relay calls are outstanding.
    let mut rx = ui.subscribe();
    let progress = tokio::spawn(async move {
        let mut last = rx.borrow_and_update().phase;
        while rx.changed().await.is_ok() {
            let phase = rx.borrow_and_update().phase;
            if phase != last {
                match phase {
                    Phase::Submitting => info!("Processing..."),
                    Phase::AwaitingDownload => info!("Clip ready, downloading..."),
                    _ => {}
                }
                last = phase;
            }
        }
    });

    let mut sink = FileSink::new(args.output);
    let phase = ui.submit(&mut sink).await;
    let message = ui.state().error.clone();
    drop(ui);
    let _ = progress.await;

    match (phase, sink.saved()) {
        (Phase::Idle, Some(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        _ => {
            error!("{}", message.as_deref().unwrap_or("clip failed"));
            ExitCode::FAILURE
        }
    }
}
