use analytics::HomeRunPaceDeriver;
use api_client::RosterDirectory;
use axum::{routing::get, Router};
use configuration::DisplayConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub deriver: HomeRunPaceDeriver,
    /// Usually a `CachedRosterDirectory`, so rosters aren't refetched per request.
    pub roster: Arc<dyn RosterDirectory>,
    pub display: DisplayConfig,
}

/// Builds the JSON API routes.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/teams", get(handlers::get_teams))
        .route("/api/players", get(handlers::get_players))
        .route("/api/pace", get(handlers::get_pace))
        .route("/api/compare", get(handlers::get_compare))
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// The main function to configure and run the web server.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::error::ApiError;
    use api_client::{EventLogSource, IdentityResolver};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use core_types::{
        DateWindow, EventType, PlateAppearanceRecord, PlayerId, RosterEntry, SeasonWindowPolicy,
        Team,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    /// Ohtani homers twice (once in Tokyo), Judge once; Freeman never does.
    struct FakeStatsApi;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hr(day: NaiveDate, home: &str, away: &str) -> PlateAppearanceRecord {
        PlateAppearanceRecord {
            date: day,
            event_type: EventType::HomeRun,
            pitcher_id: Some(PlayerId(684007)),
            home_team: home.into(),
            away_team: away.into(),
        }
    }

    #[async_trait]
    impl RosterDirectory for FakeStatsApi {
        async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
            Ok(Vec::new())
        }

        async fn list_active_players(&self) -> Result<Vec<RosterEntry>, ApiError> {
            Ok(vec![
                RosterEntry { name: "Shohei Ohtani".into(), player_id: PlayerId(660271), team: "LAD".into() },
                RosterEntry { name: "Freddie Freeman".into(), player_id: PlayerId(518692), team: "LAD".into() },
                RosterEntry { name: "Aaron Judge".into(), player_id: PlayerId(592450), team: "NYY".into() },
            ])
        }
    }

    #[async_trait]
    impl EventLogSource for FakeStatsApi {
        async fn fetch(
            &self,
            player_id: PlayerId,
            _window: DateWindow,
        ) -> Result<Vec<PlateAppearanceRecord>, ApiError> {
            Ok(match player_id.0 {
                660271 => vec![hr(date(2025, 3, 18), "CHC", "LAD"), hr(date(2025, 4, 2), "LAD", "ATL")],
                592450 => vec![hr(date(2025, 3, 18), "NYY", "BOS"), hr(date(2025, 3, 28), "NYY", "MIL")],
                _ => Vec::new(),
            })
        }
    }

    #[async_trait]
    impl IdentityResolver for FakeStatsApi {
        async fn resolve(&self, _person_id: PlayerId) -> Result<String, ApiError> {
            Ok("Shota Imanaga".into())
        }
    }

    fn app() -> Router {
        let api = Arc::new(FakeStatsApi);
        router(AppState {
            deriver: HomeRunPaceDeriver::new(api.clone(), api.clone(), SeasonWindowPolicy::default()),
            roster: api,
            display: DisplayConfig::default(),
        })
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn teams_are_sorted() {
        let (status, body) = get_json("/api/teams").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!(["LAD", "NYY"]));
    }

    #[tokio::test]
    async fn players_filter_by_team() {
        let (_, body) = get_json("/api/players?team=NYY").await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["name"], "Aaron Judge");
    }

    #[tokio::test]
    async fn pace_applies_the_season_window() {
        let (status, body) =
            get_json("/api/pace?player=Aaron%20Judge&start=2025-03-18&end=2025-04-30").await;

        assert_eq!(status, StatusCode::OK);
        let events = body["report"]["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["date"], "2025-03-28");
        assert_eq!(events[0]["sequence_number"], 1);
        assert!(body["report"]["advisory"].as_str().unwrap().contains("before 2025-03-27"));
        assert_eq!(body["series"]["color"], "#1E90FF");
    }

    #[tokio::test]
    async fn compare_defaults_to_configured_players() {
        let (status, body) = get_json("/api/compare?start=2025-03-18&end=2025-04-30").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["players"][0]["report"]["player"], "Shohei Ohtani");
        assert_eq!(body["players"][1]["report"]["player"], "Aaron Judge");
        let merged = body["comparison"]["events"].as_array().unwrap();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2]["player"], "Aaron Judge");
        assert_eq!(merged[2]["sequence_number"], 1);
    }

    #[tokio::test]
    async fn compare_without_home_runs_on_one_side_has_no_overlay() {
        let (_, body) = get_json(
            "/api/compare?player1=Freddie%20Freeman&team1=LAD&player2=Aaron%20Judge&start=2025-03-18&end=2025-04-30",
        )
        .await;
        assert!(body["comparison"].is_null());
    }

    #[tokio::test]
    async fn unknown_player_is_not_found() {
        let (status, body) = get_json("/api/pace?player=Babe%20Ruth").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Babe Ruth"));
    }

    #[tokio::test]
    async fn reversed_window_is_a_bad_request() {
        let (status, _) = get_json("/api/pace?start=2025-05-01&end=2025-04-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
