//! Inkshare replay tool
//!
//! Rebuilds a participant's page from a log of draw messages: creates the
//! board, draws the boundary guides, replays every message and installs the
//! pen cursor, then reports what ended up on each surface.

mod config;
mod logging;
mod replay;

use config::ReplayConfig;
use inkshare_config::ConfigError;
use painting::{BoundaryConfig, DrawingBoard, PaintError};
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("usage: inkshare-replay <messages.jsonl> [participant...]")]
    Usage,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read message log: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Paint(#[from] PaintError),

    #[error(transparent)]
    Replay(#[from] replay::ReplayError),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let result = run().await;
    if let Err(err) = &result {
        error!("{}", err);
    }
    result
}

async fn run() -> Result<(), AppError> {
    let config = ReplayConfig::from_args(std::env::args().skip(1)).ok_or(AppError::Usage)??;
    logging::init(config.debug);

    info!(
        "Replaying {} onto a {}x{} board",
        config.messages.display(),
        config.board.width,
        config.board.height
    );

    let mut board = DrawingBoard::new(config.board.clone())?;
    board.setup_canvas(&BoundaryConfig::from_board(&config.board))?;
    for name in &config.participants {
        board.add_participant(name)?;
    }

    let log = std::fs::read_to_string(&config.messages)?;
    let summary = replay::replay(&mut board, &log)?;
    info!(
        "Applied {} messages ({} surfaces added on the fly)",
        summary.applied, summary.created
    );

    let update = board.refresh_cursor().await?;
    info!("Cursor {:?}: {}", update, board.cursor().style());

    for name in board.surfaces().names() {
        let surface = board.surface(name)?;
        info!(
            "{:>16}: {} painted pixels of {}",
            name,
            surface.painted_pixels(),
            surface.pixel_count()
        );
    }
    Ok(())
}
