use serde::Deserialize;

/// Queue identifier of ranked solo/duo in League-v4 entries.
pub const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

// ============================================================================
// Account-v1
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
}

// ============================================================================
// League-v4
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
}

impl LeagueEntryDto {
    pub fn is_solo_queue(&self) -> bool {
        self.queue_type == SOLO_QUEUE
    }
}
