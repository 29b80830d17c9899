use async_trait::async_trait;
use tracing::trace;

use crate::error::AppError;
use crate::riot::client::RiotClient;
use crate::riot::traits::AccountApi;
use crate::riot::types::AccountDto;

#[async_trait]
impl AccountApi for RiotClient {
    /// Get account by Riot ID (game name + tag line)
    /// Uses regional routing (americas, europe, asia, sea)
    async fn get_account_by_riot_id(
        &self,
        base_url: &str,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        trace!(game_name, tag_line, base_url, "🛰️ get_account_by_riot_id");

        let url = format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            base_url,
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );

        self.get(&url).await.map_err(|e| {
            if matches!(&e, AppError::RiotApi { status: 404, .. }) {
                AppError::PlayerNotFound {
                    game_name: game_name.to_string(),
                    tag_line: tag_line.to_string(),
                }
            } else {
                e
            }
        })
    }
}
