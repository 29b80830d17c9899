use std::fmt;

use crate::error::AppError;
use crate::rank::tier::RankTier;

pub const MAX_NAME_CHARS: usize = 16;
pub const MAX_TAG_CHARS: usize = 5;

/// Stands for a space in the name segment of badge URLs.
pub const SPACE_PLACEHOLDER: char = '_';

/// Division placeholder for records without a solo queue entry.
pub const NO_DIVISION: &str = "n/a";

/// Riot ID of a player, as given by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub game_name: String,
    pub tag_line: String,
}

impl PlayerIdentity {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    /// Builds an identity from URL path segments, unescaping the space placeholder.
    pub fn from_path(game_name: &str, tag_line: &str) -> Self {
        Self::new(game_name.replace(SPACE_PLACEHOLDER, " "), tag_line)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let name_len = self.game_name.chars().count();
        if name_len == 0 || name_len > MAX_NAME_CHARS {
            return Err(AppError::InvalidPlayer(format!(
                "name must be 1 to {MAX_NAME_CHARS} characters"
            )));
        }
        if !self
            .game_name
            .chars()
            .all(|c| c.is_alphanumeric() || c == ' ' || c == '.')
        {
            return Err(AppError::InvalidPlayer(
                "name contains disallowed characters".into(),
            ));
        }

        let tag_len = self.tag_line.chars().count();
        if tag_len == 0 || tag_len > MAX_TAG_CHARS {
            return Err(AppError::InvalidPlayer(format!(
                "tag must be 1 to {MAX_TAG_CHARS} characters"
            )));
        }
        if !self.tag_line.chars().all(char::is_alphanumeric) {
            return Err(AppError::InvalidPlayer("tag must be alphanumeric".into()));
        }

        Ok(())
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

/// Normalized outcome of a rank lookup, consumed once by the badge renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRecord {
    pub tier: RankTier,
    pub division: String,
    pub player: PlayerIdentity,
    pub error_message: Option<String>,
}

impl RankRecord {
    pub fn ranked(player: PlayerIdentity, tier: RankTier, division: impl Into<String>) -> Self {
        Self {
            tier,
            division: division.into(),
            player,
            error_message: None,
        }
    }

    pub fn unranked(player: PlayerIdentity) -> Self {
        Self::ranked(player, RankTier::Unranked, NO_DIVISION)
    }

    pub fn error(player: PlayerIdentity, message: impl Into<String>) -> Self {
        Self {
            tier: RankTier::Error,
            division: NO_DIVISION.to_string(),
            player,
            error_message: Some(message.into()),
        }
    }
}
