use async_trait::async_trait;

use crate::error::AppError;
use crate::riot::types::{AccountDto, LeagueEntryDto};

#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Account-v1 lookup against a regional base URL.
    async fn get_account_by_riot_id(
        &self,
        base_url: &str,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError>;
}

#[async_trait]
pub trait LeagueApi: Send + Sync {
    /// League-v4 entries against a platform base URL.
    async fn get_league_entries_by_puuid(
        &self,
        base_url: &str,
        puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError>;
}

/// Super-trait gathering every endpoint the rank resolution needs.
pub trait RiotApi: AccountApi + LeagueApi {}

impl<T: AccountApi + LeagueApi> RiotApi for T {}
