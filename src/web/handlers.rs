use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Deserializer, de};
use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::AppState;
use crate::error::AppError;
use crate::rank::{PlayerIdentity, RankRecord};

#[derive(Debug, Default, Deserialize)]
pub(super) struct BadgeQuery {
    /// Show the tier instead of the Riot ID.
    #[serde(default, alias = "use_tier_name", deserialize_with = "flag_de")]
    use_rank_name: bool,
}

/// Accepts the usual query string spellings of a boolean.
fn flag_de<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(de::Error::invalid_value(
            de::Unexpected::Str(&raw),
            &"true, false, 1, 0, yes, no, on or off",
        )),
    }
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `GET /badge/{region}/{name}/{tag}`
///
/// Bad input and upstream failures still answer 200 with an error badge, since
/// the consumer is an `<img>` tag. Only local asset faults produce a 500.
#[instrument(skip_all)]
pub(super) async fn badge(
    State(state): State<AppState>,
    path: Result<Path<(String, String, String)>, PathRejection>,
    query: Result<Query<BadgeQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let (record, use_rank_name) = match (path, query) {
        (Ok(Path((region, name, tag))), Ok(Query(query))) => {
            let player = PlayerIdentity::from_path(&name, &tag);
            let record = state.resolver.resolve_rank(&player, &region).await;
            (record, query.use_rank_name)
        }
        (Err(rejection), _) => (rejected(rejection.body_text()), false),
        (_, Err(rejection)) => (rejected(rejection.body_text()), false),
    };

    if let Some(message) = &record.error_message {
        debug!(error_message = %message, "🌐 Serving error badge");
    }

    // Text layout is CPU bound, keep it off the async workers.
    let renderer = state.renderer.clone();
    let svg = tokio::task::spawn_blocking(move || renderer.render(&record, use_rank_name))
        .await
        .map_err(|e| AppError::Render {
            message: e.to_string(),
        })??;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        svg,
    )
        .into_response())
}

/// Error record for requests axum could not extract, e.g. non UTF-8 segments.
fn rejected(message: String) -> RankRecord {
    debug!(error_message = %message, "🌐 Malformed badge request");
    RankRecord::error(PlayerIdentity::new("", ""), message)
}
