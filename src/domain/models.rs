use serde::{Deserialize, Serialize};

use super::score_format;

pub const FRAMES_PER_MATCH: usize = 3;

/// One of the two seats in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player1,
    Player2,
}

/// A single frame; an unset score means the frame has not been played yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default, deserialize_with = "score_format::optional_score")]
    pub player1_score: Option<u32>,
    #[serde(default, deserialize_with = "score_format::optional_score")]
    pub player2_score: Option<u32>,
}

impl Frame {
    pub fn new(player1_score: Option<u32>, player2_score: Option<u32>) -> Self {
        Self {
            player1_score,
            player2_score,
        }
    }

    pub fn set_score(&mut self, side: Side, value: Option<u32>) {
        match side {
            Side::Player1 => self.player1_score = value,
            Side::Player2 => self.player2_score = value,
        }
    }

    /// Side with the strictly greater score.
    ///
    /// `None` orders below every `Some`, so a recorded score beats a missing
    /// one and two missing scores produce no winner.
    pub fn winner(&self) -> Option<Side> {
        if self.player1_score > self.player2_score {
            Some(Side::Player1)
        } else if self.player2_score > self.player1_score {
            Some(Side::Player2)
        } else {
            None
        }
    }

    pub fn is_played(&self) -> bool {
        self.player1_score.is_some() && self.player2_score.is_some()
    }
}

/// Result of a match, derived from its frames every time it is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Player1,
    Player2,
    Draw,
}

impl Outcome {
    pub fn side(self) -> Option<Side> {
        match self {
            Outcome::Player1 => Some(Side::Player1),
            Outcome::Player2 => Some(Side::Player2),
            Outcome::Draw => None,
        }
    }
}

/// One round-robin pairing with its frames and high break record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub player1: String,
    pub player2: String,
    pub frames: [Frame; FRAMES_PER_MATCH],
    #[serde(default, deserialize_with = "score_format::optional_score")]
    pub high_break: Option<u32>,
    #[serde(default, deserialize_with = "score_format::optional_name")]
    pub high_break_player: Option<String>,
}

impl Match {
    pub fn new(player1: &str, player2: &str) -> Self {
        Self {
            player1: player1.to_string(),
            player2: player2.to_string(),
            frames: Default::default(),
            high_break: None,
            high_break_player: None,
        }
    }

    pub fn participant(&self, side: Side) -> &str {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    pub fn involves(&self, name: &str) -> bool {
        self.player1 == name || self.player2 == name
    }

    /// Frames won by (player1, player2)
    pub fn frame_wins(&self) -> (u32, u32) {
        self.frames
            .iter()
            .filter_map(Frame::winner)
            .fold((0, 0), |(p1, p2), side| match side {
                Side::Player1 => (p1 + 1, p2),
                Side::Player2 => (p1, p2 + 1),
            })
    }

    pub fn outcome(&self) -> Outcome {
        let (p1, p2) = self.frame_wins();
        if p1 > p2 {
            Outcome::Player1
        } else if p2 > p1 {
            Outcome::Player2
        } else {
            Outcome::Draw
        }
    }

    /// Name of the match winner, `None` for a draw
    pub fn winner(&self) -> Option<&str> {
        self.outcome().side().map(|side| self.participant(side))
    }

    pub fn frames_played(&self) -> usize {
        self.frames.iter().filter(|f| f.is_played()).count()
    }
}

#[cfg(test)]
impl Outcome {
    pub(crate) fn swapped(self) -> Self {
        match self {
            Outcome::Player1 => Outcome::Player2,
            Outcome::Player2 => Outcome::Player1,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

#[cfg(test)]
impl Match {
    /// Same match seen from the other seat
    pub(crate) fn swapped(&self) -> Self {
        Self {
            player1: self.player2.clone(),
            player2: self.player1.clone(),
            frames: self
                .frames
                .clone()
                .map(|f| Frame::new(f.player2_score, f.player1_score)),
            high_break: self.high_break,
            high_break_player: self.high_break_player.clone(),
        }
    }
}
