//! Replays a JSON-lines message log onto a drawing board

use inkshare_ipc::IpcError;
use painting::{DrawingBoard, PaintError};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: IpcError,
    },

    #[error("Line {line}: {source}")]
    Apply {
        line: usize,
        #[source]
        source: PaintError,
    },
}

/// Counts from a replay run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    /// Surfaces created on the fly for senders nobody announced
    pub created: usize,
}

/// Apply every non-empty line of `log` in order.
///
/// A message for a surface that does not exist yet creates it as a new
/// participant; the first bad line stops the replay.
pub fn replay(board: &mut DrawingBoard, log: &str) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();

    for (index, raw) in log.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let message =
            inkshare_ipc::decode(raw).map_err(|source| ReplayError::Decode { line, source })?;

        if !board.surfaces().contains(message.canvas()) {
            warn!("Line {}: unknown surface {:?}, adding it", line, message.canvas());
            board
                .add_participant(message.canvas())
                .map_err(|source| ReplayError::Apply { line, source })?;
            summary.created += 1;
        }

        board
            .apply(&message)
            .map_err(|source| ReplayError::Apply { line, source })?;
        debug!("Line {}: applied message for {:?}", line, message.canvas());
        summary.applied += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkshare_config::BoardConfig;

    const LOG: &str = r##"
{"type":"Stroke","data":{"canvas":"remote-1","pen":{"color":"#000000","size":4},"points":[[10,10],[20,10],[20,20]]}}

{"type":"Background","data":{"canvas":"remote-2","color":"white"}}
{"type":"Clear","data":{"canvas":"remote-2"}}
"##;

    #[test]
    fn test_replay_log() {
        let mut board = DrawingBoard::new(BoardConfig::new(64, 64)).unwrap();
        board.add_participant("remote-1").unwrap();

        let summary = replay(&mut board, LOG).unwrap();

        assert_eq!(
            summary,
            ReplaySummary {
                applied: 3,
                created: 1
            }
        );
        assert!(!board.surface("remote-1").unwrap().is_blank());
        assert!(board.surface("remote-2").unwrap().is_blank());
    }

    #[test]
    fn test_replay_reports_line_numbers() {
        let mut board = DrawingBoard::new(BoardConfig::new(64, 64)).unwrap();
        let log = "{\"type\":\"Clear\",\"data\":{\"canvas\":\"canvas\"}}\nnot json\n";

        let err = replay(&mut board, log).unwrap_err();
        assert!(matches!(err, ReplayError::Decode { line: 2, .. }));
    }

    #[test]
    fn test_replay_rejects_bad_pen() {
        let mut board = DrawingBoard::new(BoardConfig::new(64, 64)).unwrap();
        let log = r##"{"type":"Stroke","data":{"canvas":"canvas","pen":{"color":"#000","size":-3},"points":[[1,1],[5,5]]}}"##;

        let err = replay(&mut board, log).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::Apply {
                line: 1,
                source: PaintError::Validation(_)
            }
        ));
        assert!(board.surface("canvas").unwrap().is_blank());
    }
}
