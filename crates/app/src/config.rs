//! Replay tool configuration

use std::path::PathBuf;

use inkshare_config::{BoardConfig, ConfigError};

/// Command line and environment settings for a replay run
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// JSON-lines file of draw messages
    pub messages: PathBuf,
    /// Surfaces to create before replaying (remote participants)
    pub participants: Vec<String>,
    /// Enable debug logging (`INKSHARE_DEBUG=1`)
    pub debug: bool,
    pub board: BoardConfig,
}

impl ReplayConfig {
    /// Build from process arguments (`<messages.jsonl> [participant...]`)
    /// and the `INKSHARE_CONFIG` / `INKSHARE_DEBUG` environment variables.
    /// Returns None when the message file is missing from the arguments.
    pub fn from_args(
        mut args: impl Iterator<Item = String>,
    ) -> Option<Result<Self, ConfigError>> {
        let messages = PathBuf::from(args.next()?);
        let participants = args.collect();
        let debug = matches!(
            std::env::var("INKSHARE_DEBUG").as_deref(),
            Ok("1") | Ok("true")
        );

        Some(BoardConfig::from_env().map(|board| Self {
            messages,
            participants,
            debug,
            board,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_file() {
        assert!(ReplayConfig::from_args(std::iter::empty()).is_none());
    }

    #[test]
    fn test_participants_follow_message_file() {
        let args = ["log.jsonl", "remote-1", "remote-2"].map(String::from);
        let config = ReplayConfig::from_args(args.into_iter()).unwrap().unwrap();
        assert_eq!(config.messages, PathBuf::from("log.jsonl"));
        assert_eq!(config.participants, vec!["remote-1", "remote-2"]);
    }
}
