use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rank_badges::badge::{BadgeAssets, BadgeRenderer};
use rank_badges::error::AppError;
use rank_badges::rank::{RankResolver, RankTier};
use rank_badges::riot::{AccountApi, AccountDto, LeagueApi, LeagueEntryDto};
use rank_badges::web::{AppState, router};
use tower::ServiceExt;

#[derive(Clone, Copy)]
enum Upstream {
    Gold,
    Unranked,
    NotFound,
}

struct FakeRiot {
    upstream: Upstream,
    calls: AtomicUsize,
}

#[async_trait]
impl AccountApi for FakeRiot {
    async fn get_account_by_riot_id(
        &self,
        _base_url: &str,
        game_name: &str,
        tag_line: &str,
    ) -> Result<AccountDto, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.upstream {
            Upstream::NotFound => Err(AppError::PlayerNotFound {
                game_name: game_name.to_string(),
                tag_line: tag_line.to_string(),
            }),
            _ => Ok(AccountDto {
                puuid: "abc123".to_string(),
            }),
        }
    }
}

#[async_trait]
impl LeagueApi for FakeRiot {
    async fn get_league_entries_by_puuid(
        &self,
        _base_url: &str,
        _puuid: &str,
    ) -> Result<Vec<LeagueEntryDto>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.upstream {
            Upstream::Gold => Ok(vec![LeagueEntryDto {
                queue_type: "RANKED_SOLO_5x5".to_string(),
                tier: "GOLD".to_string(),
                rank: "II".to_string(),
            }]),
            _ => Ok(Vec::new()),
        }
    }
}

struct FakeAssets {
    icons: bool,
}

impl BadgeAssets for FakeAssets {
    fn tier_icon(&self, tier: &RankTier) -> Result<Vec<u8>, AppError> {
        if self.icons {
            Ok(b"\x89PNG".to_vec())
        } else {
            Err(AppError::Asset {
                path: format!("{}.png", tier.icon_name()),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        }
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 7.0
    }
}

fn build_app(upstream: Upstream, icons: bool) -> (axum::Router, Arc<FakeRiot>) {
    let riot = Arc::new(FakeRiot {
        upstream,
        calls: AtomicUsize::new(0),
    });
    let state = AppState::new(
        RankResolver::new(riot.clone()),
        BadgeRenderer::new(Arc::new(FakeAssets { icons })),
    );
    (router(state), riot)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Option<String>, Option<String>, String) {
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = res.status();
    let header_value = |name: header::HeaderName| {
        res.headers()
            .get(name)
            .map(|v: &header::HeaderValue| v.to_str().unwrap().to_string())
    };
    let content_type = header_value(header::CONTENT_TYPE);
    let cache_control = header_value(header::CACHE_CONTROL);
    let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();

    (
        status,
        content_type,
        cache_control,
        String::from_utf8(body.to_vec()).unwrap(),
    )
}

#[tokio::test]
async fn gold_player_gets_a_gold_badge() {
    let (app, riot) = build_app(Upstream::Gold, true);

    let (status, content_type, cache_control, body) = get(app, "/badge/NA1/Eggo/WFLE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
    assert_eq!(cache_control.as_deref(), Some("no-cache"));
    assert!(body.contains("fill=\"#ae8a5a\""));
    assert!(body.contains(">Eggo#WFLE</text>"));
    assert_eq!(riot.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn tier_name_flag_switches_the_label() {
    let (app, _) = build_app(Upstream::Gold, true);

    let (_, _, _, body) = get(app, "/badge/na1/Eggo/WFLE?use_rank_name=true").await;
    assert!(body.contains(">GOLD</text>"));

    let (app, _) = build_app(Upstream::Gold, true);
    let (_, _, _, body) = get(app, "/badge/na1/Eggo/WFLE?use_tier_name=true").await;
    assert!(body.contains(">GOLD</text>"));
}

#[tokio::test]
async fn tier_name_flag_accepts_common_spellings() {
    for flag in ["1", "yes", "on", "TRUE"] {
        let (app, _) = build_app(Upstream::Gold, true);

        let uri = format!("/badge/NA1/Eggo/WFLE?use_rank_name={flag}");
        let (status, _, _, body) = get(app, &uri).await;

        assert_eq!(status, StatusCode::OK, "{flag}");
        assert!(body.contains(">GOLD</text>"), "{flag}");
    }

    for flag in ["0", "no", "off", "false"] {
        let (app, _) = build_app(Upstream::Gold, true);

        let uri = format!("/badge/NA1/Eggo/WFLE?use_rank_name={flag}");
        let (_, _, _, body) = get(app, &uri).await;

        assert!(body.contains(">Eggo#WFLE</text>"), "{flag}");
    }
}

#[tokio::test]
async fn unextractable_requests_get_an_error_badge() {
    for uri in [
        "/badge/NA1/%FF/WFLE",
        "/badge/NA1/Eggo/%C3%28",
        "/badge/NA1/Eggo/WFLE?use_rank_name=maybe",
        "/badge/NA1/Eggo/WFLE?use_rank_name=true&use_tier_name=true",
    ] {
        let (app, riot) = build_app(Upstream::Gold, true);

        let (status, content_type, cache_control, body) = get(app, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"), "{uri}");
        assert_eq!(cache_control.as_deref(), Some("no-cache"), "{uri}");
        assert!(body.contains("fill=\"#cc0000\""), "{uri}");
        assert!(body.contains(">ERROR</text>"), "{uri}");
        assert_eq!(riot.calls.load(Ordering::SeqCst), 0, "{uri}");
    }
}

#[tokio::test]
async fn underscore_stands_for_a_space() {
    let (app, _) = build_app(Upstream::Unranked, true);

    let (status, _, _, body) = get(app, "/badge/EUW/Le_Conservateur/3012").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(">Le Conservateur#3012</text>"));
    assert!(body.contains("fill=\"#808080\""));
}

#[tokio::test]
async fn unknown_player_gets_an_error_badge_with_200() {
    let (app, riot) = build_app(Upstream::NotFound, true);

    let (status, _, _, body) = get(app, "/badge/NA1/Eggo/WFLE").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("fill=\"#cc0000\""));
    assert!(body.contains(">ERROR</text>"));
    assert_eq!(riot.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn invalid_input_short_circuits_to_error_badge() {
    for uri in [
        "/badge/NA1/ThisNameIsWayTooLong/WFLE",
        "/badge/NA1/Eggo/TOOLONG",
        "/badge/NA1/Eg%3Cgo/WFLE",
        "/badge/ZZ9/Eggo/WFLE",
    ] {
        let (app, riot) = build_app(Upstream::Gold, true);

        let (status, content_type, _, body) = get(app, uri).await;

        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(content_type.as_deref(), Some("image/svg+xml"));
        assert!(body.contains(">ERROR</text>"), "{uri}");
        assert_eq!(riot.calls.load(Ordering::SeqCst), 0, "{uri}");
    }
}

#[tokio::test]
async fn missing_icon_is_a_server_error() {
    let (app, _) = build_app(Upstream::Gold, false);

    let (status, _, _, _) = get(app, "/badge/NA1/Eggo/WFLE").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn root_reports_service_name() {
    let (app, _) = build_app(Upstream::Gold, true);

    let (status, _, _, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("rank-badges"));
}
