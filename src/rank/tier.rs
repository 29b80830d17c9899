use std::fmt;

/// Fill used for tier strings the color table does not know.
pub const FALLBACK_COLOR: &str = "#FFFFFF";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RankTier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
    Unranked,
    Error,
    /// Tier string returned by the API that is not part of the table.
    Unknown(String),
}

impl RankTier {
    /// Every tier with an entry in the color table.
    pub const KNOWN: [RankTier; 12] = [
        Self::Iron,
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
        Self::Emerald,
        Self::Diamond,
        Self::Master,
        Self::Grandmaster,
        Self::Challenger,
        Self::Unranked,
        Self::Error,
    ];

    /// Parses a tier as returned by League-v4 (`"GOLD"`), case-insensitively.
    pub fn from_api(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "iron" => Self::Iron,
            "bronze" => Self::Bronze,
            "silver" => Self::Silver,
            "gold" => Self::Gold,
            "platinum" => Self::Platinum,
            "emerald" => Self::Emerald,
            "diamond" => Self::Diamond,
            "master" => Self::Master,
            "grandmaster" => Self::Grandmaster,
            "challenger" => Self::Challenger,
            "unranked" => Self::Unranked,
            "error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Iron => "iron",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Emerald => "emerald",
            Self::Diamond => "diamond",
            Self::Master => "master",
            Self::Grandmaster => "grandmaster",
            Self::Challenger => "challenger",
            Self::Unranked => "unranked",
            Self::Error => "error",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Iron => "#3c2f2a",
            Self::Bronze => "#ae6f5b",
            Self::Silver => "#7c8892",
            Self::Gold => "#ae8a5a",
            Self::Platinum => "#97eaf0",
            Self::Emerald => "#33b86f",
            Self::Diamond => "#218dc6",
            Self::Master => "#ba48e1",
            Self::Grandmaster => "#e3653d",
            Self::Challenger => "#43AFEC",
            Self::Error => "#cc0000",
            Self::Unranked => "#808080",
            Self::Unknown(_) => FALLBACK_COLOR,
        }
    }

    /// Name of the icon asset; unknown tiers borrow the unranked one.
    pub fn icon_name(&self) -> &str {
        match self {
            Self::Unknown(_) => Self::Unranked.as_str(),
            known => known.as_str(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
