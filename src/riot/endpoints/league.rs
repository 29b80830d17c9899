use async_trait::async_trait;
use tracing::trace;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::traits::LeagueApi;
use crate::riot::types::LeagueEntryDto;

#[async_trait]
impl LeagueApi for RiotClient {
    /// Get league entries (ranked info) for a player by PUUID
    /// Uses platform routing (euw1, na1, kr, etc.)
    async fn get_league_entries_by_puuid(
        &self,
        base_url: &str,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        trace!(puuid, base_url, "🛰️ get_league_entries_by_puuid");

        let url = format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            base_url,
            urlencoding::encode(puuid)
        );

        self.get(&url).await
    }
}
