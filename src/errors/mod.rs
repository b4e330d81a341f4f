use thiserror::Error;

/// Rejected score or high break edit
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("match {index} does not exist (tournament has {count} matches)")]
    MatchOutOfRange { index: usize, count: usize },
    #[error("frame {index} does not exist (matches have {count} frames)")]
    FrameOutOfRange { index: usize, count: usize },
    #[error("{player} is not playing in {player1} vs {player2}")]
    NotAParticipant {
        player: String,
        player1: String,
        player2: String,
    },
}

/// Rejected import file; the current tournament is left as it was
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file is not valid tournament data: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("match {index} pairs {player} against themselves")]
    SelfMatch { index: usize, player: String },
    #[error("match {index} lists {player}, who is not on the roster")]
    UnknownPlayer { index: usize, player: String },
    #[error("{player1} vs {player2} appears more than once")]
    DuplicatePairing { player1: String, player2: String },
    #[error("{player1} vs {player2} is missing")]
    MissingPairing { player1: String, player2: String },
    #[error("match {index} credits the high break to {player}, who did not play in it")]
    HighBreakOutsider { index: usize, player: String },
}
