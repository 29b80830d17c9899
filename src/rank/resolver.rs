use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::error::AppError;
use crate::rank::record::{PlayerIdentity, RankRecord};
use crate::rank::tier::RankTier;
use crate::riot::{RiotApi, resolve_base_url};

#[derive(Debug, Error)]
enum ResolveError {
    #[error("{0}")]
    InvalidPlayer(#[source] AppError),
    #[error("Invalid region: {0}")]
    InvalidRegion(String),
    #[error("PUUID lookup failed: {0}")]
    Identity(#[source] AppError),
    #[error("PUUID not found or invalid.")]
    MissingPuuid,
    #[error("Rank lookup failed: {0}")]
    Rank(#[source] AppError),
}

/// Resolves a Riot ID into its ranked solo queue standing.
pub struct RankResolver {
    api: Arc<dyn RiotApi>,
}

impl RankResolver {
    pub fn new(api: Arc<dyn RiotApi>) -> Self {
        Self { api }
    }

    /// Always yields a record: every failure becomes an error tier record.
    #[instrument(skip(self, player), fields(riot_id = %player))]
    pub async fn resolve_rank(&self, player: &PlayerIdentity, region_code: &str) -> RankRecord {
        match self.try_resolve(player, region_code).await {
            Ok(record) => {
                info!(tier = %record.tier, division = %record.division, "🏅 Rank resolved");
                record
            }
            Err(e) => {
                warn!(error = %e, "🏅 ⚠️ Rank resolution failed");
                RankRecord::error(player.clone(), e.to_string())
            }
        }
    }

    async fn try_resolve(
        &self,
        player: &PlayerIdentity,
        region_code: &str,
    ) -> Result<RankRecord, ResolveError> {
        player.validate().map_err(ResolveError::InvalidPlayer)?;

        let puuid = self.lookup_puuid(player, region_code).await?;

        let platform_url = resolve_base_url(region_code, false)
            .map_err(|_| ResolveError::InvalidRegion(region_code.to_string()))?;

        let entries = self
            .api
            .get_league_entries_by_puuid(&platform_url, &puuid)
            .await
            .map_err(ResolveError::Rank)?;

        let record = match entries.into_iter().find(|entry| entry.is_solo_queue()) {
            Some(entry) => {
                RankRecord::ranked(player.clone(), RankTier::from_api(&entry.tier), entry.rank)
            }
            None => {
                debug!("🏅 No solo queue entry, player is unranked");
                RankRecord::unranked(player.clone())
            }
        };

        Ok(record)
    }

    async fn lookup_puuid(
        &self,
        player: &PlayerIdentity,
        region_code: &str,
    ) -> Result<String, ResolveError> {
        let regional_url = resolve_base_url(region_code, true)
            .map_err(|_| ResolveError::InvalidRegion(region_code.to_string()))?;

        let account = self
            .api
            .get_account_by_riot_id(&regional_url, &player.game_name, &player.tag_line)
            .await
            .map_err(ResolveError::Identity)?;

        if account.puuid.trim().is_empty() {
            return Err(ResolveError::MissingPuuid);
        }

        debug!(puuid = %account.puuid, "🏅 PUUID found");
        Ok(account.puuid)
    }
}
